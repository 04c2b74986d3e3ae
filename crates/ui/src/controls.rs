use neo_lux_core::validate::{Field, FieldKind};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

/// A form control the validators understand
#[derive(Clone)]
pub enum Control {
    Input(HtmlInputElement),
    TextArea(HtmlTextAreaElement),
    Select(HtmlSelectElement),
}

impl Control {
    pub fn from_element(el: Element) -> Option<Self> {
        el.dyn_into::<HtmlInputElement>()
            .map(Self::Input)
            .or_else(|el| el.dyn_into::<HtmlTextAreaElement>().map(Self::TextArea))
            .or_else(|el| el.dyn_into::<HtmlSelectElement>().map(Self::Select))
            .ok()
    }

    pub fn element(&self) -> &HtmlElement {
        match self {
            Self::Input(el) => el,
            Self::TextArea(el) => el,
            Self::Select(el) => el,
        }
    }

    pub fn kind(&self) -> FieldKind {
        match self {
            Self::Input(el) => FieldKind::from_input_type(&el.type_()),
            Self::TextArea(_) => FieldKind::TextArea,
            Self::Select(_) => FieldKind::Select,
        }
    }

    pub fn name(&self) -> String {
        match self {
            Self::Input(el) => el.name(),
            Self::TextArea(el) => el.name(),
            Self::Select(el) => el.name(),
        }
    }

    pub fn value(&self) -> String {
        match self {
            Self::Input(el) => el.value(),
            Self::TextArea(el) => el.value(),
            Self::Select(el) => el.value(),
        }
    }

    /// Snapshot for validation
    pub fn field(&self) -> Field {
        let (required, checked) = match self {
            Self::Input(el) => (el.required(), el.checked()),
            Self::TextArea(el) => (el.required(), false),
            Self::Select(el) => (el.required(), false),
        };
        Field {
            kind: self.kind(),
            name: self.name(),
            value: self.value(),
            required,
            checked,
        }
    }
}
