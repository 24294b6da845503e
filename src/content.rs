//! Display data for the profile card. Pure presentation; the engine never
//! reads any of it.

use crate::constants::{
    CARD_AVATAR_ID, CARD_CONTACT_BTN_ID, CARD_HANDLE_ID, CARD_NAME_ID, CARD_STATUS_ID,
    CARD_TITLE_ID, CONTACT_SECTION_ID,
};
use crate::dom;
use web_sys as web;

#[derive(Clone, Copy, Debug)]
pub struct CardProps {
    pub avatar_url: &'static str,
    pub name: &'static str,
    pub title: &'static str,
    pub handle: &'static str,
    pub status: &'static str,
    pub contact_text: &'static str,
}

impl Default for CardProps {
    fn default() -> Self {
        Self {
            avatar_url: "assets/avatar.png",
            name: "Javi A. Torres",
            title: "Software Engineer",
            handle: "javicodes",
            status: "Online",
            contact_text: "Contact Me",
        }
    }
}

pub fn populate_card(document: &web::Document, props: &CardProps) -> anyhow::Result<()> {
    let avatar: web::HtmlImageElement = dom::element_by_id(document, CARD_AVATAR_ID)?;
    avatar.set_src(props.avatar_url);
    avatar.set_alt(props.name);
    dom::set_text(document, CARD_NAME_ID, props.name);
    dom::set_text(document, CARD_TITLE_ID, props.title);
    dom::set_text(document, CARD_HANDLE_ID, &format!("@{}", props.handle));
    dom::set_text(document, CARD_STATUS_ID, props.status);
    dom::set_text(document, CARD_CONTACT_BTN_ID, props.contact_text);
    Ok(())
}

/// The card's contact button scrolls to the contact section. The engine
/// only hears about this as an opaque activation.
pub fn wire_contact_activation(document: &web::Document) {
    let doc = document.clone();
    dom::add_click_listener(document, CARD_CONTACT_BTN_ID, move || {
        if let Some(section) = doc.get_element_by_id(CONTACT_SECTION_ID) {
            section.scroll_into_view();
        }
    });
}
