// src/app/renderer.rs
//! 画面への描画まわり。
//!
//! ゲームのロジックは `Renderer` トレイトにしか話しかけないので、
//! テストでは記録するだけのレンダラー、ブラウザでは `DomRenderer` を差し込むよ。

use log::error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlElement, HtmlInputElement};

use crate::components::card::Card;
use crate::config::layout::*;

/// メッセージの種類。色が変わるだけ。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Normal,
    Success,
    Error,
}

impl MessageKind {
    pub fn color(&self) -> &'static str {
        match self {
            MessageKind::Normal => MESSAGE_COLOR_NORMAL,
            MessageKind::Success => MESSAGE_COLOR_SUCCESS,
            MessageKind::Error => MESSAGE_COLOR_ERROR,
        }
    }
}

/// UI 側の受け口。
pub trait Renderer {
    /// ターゲット、手札、スコアを描き直す。
    fn on_round_rendered(&mut self, target: &Card, hand: &[Card], score: u32);

    fn on_message(&mut self, text: &str, kind: MessageKind);

    /// 式の入力欄を空にする (新しいラウンドを配った時)。
    fn clear_input(&mut self) {}
}

/// index.html の要素に直接書き込むレンダラー。
pub struct DomRenderer {
    document: Document,
    target_card: Element,
    hand_area: Element,
    score_display: Element,
    message_display: HtmlElement,
    formula_input: HtmlInputElement,
}

impl DomRenderer {
    /// 必要な要素を id で探してつかんでおく。1つでも見つからなければエラー。
    pub fn from_document(document: Document) -> Result<Self, JsValue> {
        let target_card = element_by_id(&document, TARGET_CARD_ID)?;
        let hand_area = element_by_id(&document, HAND_AREA_ID)?;
        let score_display = element_by_id(&document, SCORE_DISPLAY_ID)?;
        let message_display = element_by_id(&document, MESSAGE_DISPLAY_ID)?.dyn_into::<HtmlElement>()?;
        let formula_input = element_by_id(&document, FORMULA_INPUT_ID)?.dyn_into::<HtmlInputElement>()?;

        Ok(Self { document, target_card, hand_area, score_display, message_display, formula_input })
    }

    /// 入力欄に今書かれている式。
    pub fn formula_text(&self) -> String {
        self.formula_input.value()
    }

    fn render_hand(&self, hand: &[Card]) -> Result<(), JsValue> {
        // 前の手札を消して見出しだけにする
        self.hand_area.set_inner_html(HAND_AREA_HEADING);
        for card in hand {
            let card_el = self.document.create_element("div")?;
            card_el.set_class_name(CARD_CLASS_NAME);
            card_el.set_text_content(Some(card.display()));
            self.hand_area.append_child(&card_el)?;
        }
        Ok(())
    }
}

impl Renderer for DomRenderer {
    fn on_round_rendered(&mut self, target: &Card, hand: &[Card], score: u32) {
        self.target_card.set_text_content(Some(target.display()));
        if let Err(e) = self.render_hand(hand) {
            error!("Failed to render hand: {:?}", e);
        }
        self.score_display.set_text_content(Some(&format!("Score: {}", score)));
    }

    fn on_message(&mut self, text: &str, kind: MessageKind) {
        self.message_display.set_text_content(Some(text));
        if let Err(e) = self.message_display.style().set_property("color", kind.color()) {
            error!("Failed to set message color: {:?}", e);
        }
    }

    fn clear_input(&mut self) {
        self.formula_input.set_value("");
    }
}

pub(crate) fn element_by_id(document: &Document, id: &str) -> Result<Element, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element #{} not found", id)))
}
