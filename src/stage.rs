use crate::audio::AudioBank;
use crate::constants::*;
use crate::dom::{self, Target};
use missed_call_core::{
    capture_layout, dispatch_audio, sound_icon, Effect, Layout, Rect, Section,
};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Handles to everything the reducer's effects can touch.
pub struct Stage {
    pub document: web::Document,
    sections: Vec<Option<Target>>,
    nav_numbers: Vec<web::Element>,
    pub audio: AudioBank,
    sound_icon: Option<web::Element>,
    choice_phone: Option<web::Element>,
    video: Option<web::HtmlIFrameElement>,
}

impl Stage {
    pub fn from_document(document: web::Document) -> Self {
        let sections = Section::ALL
            .iter()
            .map(|s| dom::by_id(&document, s.element_id()).map(Target))
            .collect();
        let video = dom::by_id(&document, VIDEO_FRAME_ID)
            .and_then(|el| el.dyn_into::<web::HtmlIFrameElement>().ok());
        Self {
            sections,
            nav_numbers: dom::query_all(&document, NAV_NUMBER_SELECTOR),
            audio: AudioBank::from_document(&document),
            sound_icon: dom::query(&document, SOUND_ICON_SELECTOR),
            choice_phone: dom::query(&document, CHOICE_PHONE_SELECTOR),
            video,
            document,
        }
    }

    pub fn section(&self, section: Section) -> Option<&web::Element> {
        self.sections
            .get(section.index())
            .and_then(|s| s.as_ref())
            .map(|t| &t.0)
    }

    pub fn nav_numbers(&self) -> &[web::Element] {
        &self.nav_numbers
    }

    pub fn video(&self) -> Option<&web::HtmlIFrameElement> {
        self.video.as_ref()
    }

    pub fn layout(&self) -> Layout {
        capture_layout(&self.sections, dom::viewport_height())
    }

    pub fn choice_rect(&self) -> Option<Rect> {
        self.section(Section::Choice).map(dom::rect_of)
    }

    pub fn scroll_to(&self, section: Section) {
        if let Some(el) = self.section(section) {
            dom::scroll_into_view(el);
        }
    }

    /// Reload the embedded video; the host page gives no playback API.
    pub fn restart_video(&self) {
        if let Some(frame) = &self.video {
            let src = frame.src();
            frame.set_src(&src);
            log::info!("[video] restarted");
        }
    }

    pub fn run(&self, effects: &[Effect]) {
        for effect in effects {
            if dispatch_audio(&self.audio, effect) {
                continue;
            }
            match effect {
                Effect::HighlightNav(current) => {
                    for (i, nav) in self.nav_numbers.iter().enumerate() {
                        dom::set_class(nav, CLASS_ACTIVE, i == current.index());
                    }
                }
                Effect::Ringing(on) => {
                    if let Some(phone) = &self.choice_phone {
                        dom::set_class(phone, CLASS_RINGING, *on);
                    }
                }
                Effect::ChoiceBackground(gradient) => {
                    if let Some(el) = self.section(Section::Choice) {
                        dom::set_style(el, "background", &gradient.css());
                    }
                }
                Effect::SoundIcon { on } => {
                    if let Some(icon) = &self.sound_icon {
                        icon.set_text_content(Some(sound_icon(*on)));
                    }
                }
                _ => {}
            }
        }
    }
}
