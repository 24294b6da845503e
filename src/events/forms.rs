//! Wiring for the page's interactive chrome: theme toggle, contact form,
//! chat widget. Behavior only; markup and styling live in the page.

use crate::api;
use crate::constants::{
    CHAT_FAILURE_NOTICE, CHAT_GREETING, CHAT_INPUT_ID, CHAT_LOG_ID, CHAT_PANEL_ID,
    CHAT_PENDING_NOTICE, CHAT_SEND_ID, CHAT_TOGGLE_ID, CONTACT_EMAIL_ERROR_ID, CONTACT_EMAIL_ID,
    CONTACT_FAILURE_NOTICE, CONTACT_MESSAGE_ERROR_ID, CONTACT_MESSAGE_ID, CONTACT_NAME_ERROR_ID,
    CONTACT_NAME_ID, CONTACT_SEND_ID, CONTACT_SENT_NOTICE, CONTACT_STATUS_ID, HIDDEN_CLASS,
    THEME_TOGGLE_ID,
};
use crate::core::contact::{bound_history, ChatTurn, ContactField, ContactForm, FieldError, Role};
use crate::dom;
use crate::theme::ThemeController;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

/// The controller moves into the toggle closure; it is the only place that
/// mutates the theme after init.
pub fn wire_theme_toggle(
    window: &web::Window,
    document: &web::Document,
    mut controller: ThemeController,
) {
    let window = window.clone();
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        controller.toggle(&window, &doc);
    });
}

pub fn wire_contact_form(document: &web::Document) -> anyhow::Result<()> {
    let name: web::HtmlInputElement = dom::element_by_id(document, CONTACT_NAME_ID)?;
    let email: web::HtmlInputElement = dom::element_by_id(document, CONTACT_EMAIL_ID)?;
    let message: web::HtmlTextAreaElement = dom::element_by_id(document, CONTACT_MESSAGE_ID)?;

    let doc = document.clone();
    dom::add_click_listener(document, CONTACT_SEND_ID, move || {
        let form = ContactForm {
            name: name.value(),
            email: email.value(),
            message: message.value(),
        };
        let errors = form.validate();
        show_field_error(&doc, CONTACT_NAME_ERROR_ID, &errors, ContactField::Name);
        show_field_error(&doc, CONTACT_EMAIL_ERROR_ID, &errors, ContactField::Email);
        show_field_error(&doc, CONTACT_MESSAGE_ERROR_ID, &errors, ContactField::Message);
        if !errors.is_empty() {
            return;
        }
        dom::set_text(&doc, CONTACT_STATUS_ID, "");

        let doc = doc.clone();
        let name = name.clone();
        let email = email.clone();
        let message = message.clone();
        spawn_local(async move {
            match api::send_contact(&form).await {
                Ok(()) => {
                    dom::set_text(&doc, CONTACT_STATUS_ID, CONTACT_SENT_NOTICE);
                    name.set_value("");
                    email.set_value("");
                    message.set_value("");
                }
                Err(e) => {
                    log::warn!("contact send failed: {e}");
                    dom::set_text(&doc, CONTACT_STATUS_ID, CONTACT_FAILURE_NOTICE);
                }
            }
        });
    });
    Ok(())
}

fn show_field_error(
    document: &web::Document,
    id: &str,
    errors: &[FieldError],
    field: ContactField,
) {
    let msg = errors
        .iter()
        .find(|e| e.field == field)
        .map(|e| e.message)
        .unwrap_or("");
    dom::set_text(document, id, msg);
}

pub fn wire_chat(document: &web::Document) -> anyhow::Result<()> {
    let input: web::HtmlInputElement = dom::element_by_id(document, CHAT_INPUT_ID)?;
    let log_el: web::Element = dom::element_by_id(document, CHAT_LOG_ID)?;

    let history = Rc::new(RefCell::new(vec![ChatTurn::assistant(CHAT_GREETING)]));
    append_chat_line(document, &log_el, Role::Assistant, CHAT_GREETING);

    {
        let doc = document.clone();
        dom::add_click_listener(document, CHAT_TOGGLE_ID, move || {
            if let Some(panel) = doc.get_element_by_id(CHAT_PANEL_ID) {
                _ = panel.class_list().toggle(HIDDEN_CLASS);
            }
        });
    }
    {
        let doc = document.clone();
        let history = history.clone();
        let input = input.clone();
        let log_el = log_el.clone();
        dom::add_click_listener(document, CHAT_SEND_ID, move || {
            submit_chat(&doc, &history, &input, &log_el);
        });
    }
    {
        let doc = document.clone();
        let input_for_key = input.clone();
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(
            move |ev: web::KeyboardEvent| {
                if ev.key() == "Enter" {
                    submit_chat(&doc, &history, &input_for_key, &log_el);
                }
            },
        ) as Box<dyn FnMut(_)>);
        _ = input.add_event_listener_with_callback("keydown", closure.as_ref().unchecked_ref());
        closure.forget();
    }
    Ok(())
}

/// Push the user's turn, send the bounded history, and replace the pending
/// line with the reply (or the single failure notice).
fn submit_chat(
    document: &web::Document,
    history: &Rc<RefCell<Vec<ChatTurn>>>,
    input: &web::HtmlInputElement,
    log_el: &web::Element,
) {
    let text = input.value();
    let text = text.trim();
    if text.is_empty() {
        return;
    }
    input.set_value("");
    append_chat_line(document, log_el, Role::User, text);
    history.borrow_mut().push(ChatTurn::user(text));
    let turns = bound_history(&history.borrow()).to_vec();

    let pending = append_chat_line(document, log_el, Role::Assistant, CHAT_PENDING_NOTICE);
    let history = history.clone();
    let log_el = log_el.clone();
    spawn_local(async move {
        let line = match api::send_chat(&turns).await {
            Ok(reply) => {
                history.borrow_mut().push(ChatTurn::assistant(&reply));
                reply
            }
            Err(e) => {
                log::warn!("chat relay failed: {e}");
                CHAT_FAILURE_NOTICE.to_string()
            }
        };
        if let Some(p) = pending {
            p.set_text_content(Some(&line));
        }
        log_el.set_scroll_top(log_el.scroll_height());
    });
}

fn append_chat_line(
    document: &web::Document,
    log_el: &web::Element,
    role: Role,
    text: &str,
) -> Option<web::Element> {
    let line = document.create_element("div").ok()?;
    line.set_class_name(match role {
        Role::User => "chat-msg user",
        Role::Assistant => "chat-msg assistant",
    });
    line.set_text_content(Some(text));
    _ = log_el.append_child(&line);
    log_el.set_scroll_top(log_el.scroll_height());
    Some(line)
}
