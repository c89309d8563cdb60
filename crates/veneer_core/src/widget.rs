//! Widget nodes as observed in the host's object graph
//!
//! The engine distinguishes widgets by runtime kind and name string only;
//! the host exposes no semantic tags. The kind set is closed: structural
//! fixups dispatch over it by table, and a new host widget kind is a new
//! enum variant plus a table entry.

use std::sync::Arc;

use image::RgbaImage;

use crate::color::Color;
use crate::font::FontDesc;

slotmap::new_key_type! {
    /// Key of a live widget in the tree arena
    pub struct WidgetId;
}

/// Runtime type tag of a host widget
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    Window,
    Button,
    Label,
    TextBox,
    ComboBox,
    ListBox,
    ListView,
    TreeView,
    TabPanel,
    FlowPanel,
}

/// Border rendering of boxed widgets
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BorderStyle {
    None,
    /// The host's sunken three-dimensional default
    #[default]
    Inset3D,
    Single,
}

/// Flat-appearance mode of buttons and combo boxes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FlatStyle {
    #[default]
    Standard,
    Flat,
}

/// Editability of a combo box
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ComboStyle {
    #[default]
    Editable,
    DropDownList,
}

/// Tab strip sizing of a tab panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TabSizeMode {
    #[default]
    Normal,
    FillToRight,
}

/// Mutable style block of a widget
///
/// This is the union of the style surface the engine touches across all
/// widget kinds; fields that make no sense for a kind are simply never
/// written for it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct WidgetStyle {
    pub background: Option<Color>,
    pub foreground: Option<Color>,
    pub font: Option<FontDesc>,
    pub border: BorderStyle,
    pub flat: FlatStyle,
    pub flat_border_color: Option<Color>,
    pub flat_border_width: u8,
    pub auto_size: bool,
    pub combo: ComboStyle,
    pub tab_size_mode: TabSizeMode,
    /// Tab strip padding (x, y)
    pub tab_padding: (i32, i32),
    pub full_row_select: bool,
    pub multiline: bool,
    /// Horizontal text inset of edit fields, in pixels
    pub text_padding: u8,
    /// Column count of detail list views
    pub columns: u32,
    pub location: (i32, i32),
    /// Window chrome icon visibility; windows only
    pub show_chrome_icon: bool,
}

/// One node of the live window tree
#[derive(Clone, Debug)]
pub struct Widget {
    pub kind: WidgetKind,
    pub name: String,
    pub text: String,
    pub style: WidgetStyle,
    pub background_image: Option<Arc<RgbaImage>>,
    pub(crate) children: Vec<WidgetId>,
    pub(crate) parent: Option<WidgetId>,
}

impl Widget {
    pub fn new(kind: WidgetKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            text: String::new(),
            style: WidgetStyle {
                show_chrome_icon: kind == WidgetKind::Window,
                ..WidgetStyle::default()
            },
            background_image: None,
            children: Vec::new(),
            parent: None,
        }
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn with_style(mut self, style: WidgetStyle) -> Self {
        self.style = style;
        self
    }

    /// Child keys in the host's native z-order
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }
}
