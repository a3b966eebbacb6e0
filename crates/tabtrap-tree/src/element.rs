#![forbid(unsafe_code)]

//! Element descriptions: kind, enablement, and computed-style flags.
//!
//! An [`Element`] carries everything the focusable query looks at. Defaults
//! describe a rendered, enabled element with a nonzero layout box, so tests
//! only state what they want to deviate.

/// What kind of element a node is.
///
/// The set mirrors the interactive-element families a focus query cares
/// about; everything non-interactive is [`ElementKind::Block`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Generic non-interactive element.
    Block,
    /// Anchor; focusable only with a hyperlink target.
    Link {
        /// Whether the anchor has a hyperlink target.
        has_href: bool,
    },
    /// Button control.
    Button,
    /// Single-line text input.
    TextInput,
    /// Multi-line text area.
    TextArea,
    /// Dropdown select control.
    Select,
    /// Audio/video; focusable when playback controls are shown.
    Media {
        /// Whether playback controls are rendered.
        controls: bool,
    },
    /// Editable text region.
    Editable {
        /// Whether editing is currently enabled.
        enabled: bool,
    },
}

/// Computed display, reduced to the one distinction that matters here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    /// Participates in layout.
    #[default]
    Block,
    /// Removed from layout; descendants are unrendered too.
    None,
}

/// Computed visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Visibility {
    /// Visible.
    #[default]
    Visible,
    /// Hidden but still occupying layout space.
    Hidden,
}

/// Builder-style description of a node.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Element kind.
    pub kind: ElementKind,
    /// Disabled state; excludes a node from focus regardless of kind.
    pub disabled: bool,
    /// Explicit tab index. Non-negative opts any node in; negative opts out.
    pub tab_index: Option<i32>,
    /// Computed display.
    pub display: Display,
    /// Computed visibility.
    pub visibility: Visibility,
    /// Computed opacity in `[0.0, 1.0]`.
    pub opacity: f32,
    /// Fixed positioning; counts as rendered even with a zero layout box.
    pub fixed: bool,
    /// Layout box extents (width, height).
    pub size: (u16, u16),
}

impl Element {
    fn of_kind(kind: ElementKind) -> Self {
        Self {
            kind,
            disabled: false,
            tab_index: None,
            display: Display::Block,
            visibility: Visibility::Visible,
            opacity: 1.0,
            fixed: false,
            size: (10, 2),
        }
    }

    /// Generic non-interactive element.
    #[must_use]
    pub fn block() -> Self {
        Self::of_kind(ElementKind::Block)
    }

    /// Anchor with a hyperlink target.
    #[must_use]
    pub fn link() -> Self {
        Self::of_kind(ElementKind::Link { has_href: true })
    }

    /// Anchor without a hyperlink target (placeholder; not focusable).
    #[must_use]
    pub fn anchor() -> Self {
        Self::of_kind(ElementKind::Link { has_href: false })
    }

    /// Button control.
    #[must_use]
    pub fn button() -> Self {
        Self::of_kind(ElementKind::Button)
    }

    /// Single-line text input.
    #[must_use]
    pub fn text_input() -> Self {
        Self::of_kind(ElementKind::TextInput)
    }

    /// Multi-line text area.
    #[must_use]
    pub fn text_area() -> Self {
        Self::of_kind(ElementKind::TextArea)
    }

    /// Dropdown select control.
    #[must_use]
    pub fn select() -> Self {
        Self::of_kind(ElementKind::Select)
    }

    /// Media element without visible controls.
    #[must_use]
    pub fn media() -> Self {
        Self::of_kind(ElementKind::Media { controls: false })
    }

    /// Enabled editable region.
    #[must_use]
    pub fn editable() -> Self {
        Self::of_kind(ElementKind::Editable { enabled: true })
    }

    /// Mark the element disabled.
    #[must_use]
    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    /// Set an explicit tab index.
    #[must_use]
    pub fn tab_index(mut self, value: i32) -> Self {
        self.tab_index = Some(value);
        self
    }

    /// Set computed display.
    #[must_use]
    pub fn display(mut self, value: Display) -> Self {
        self.display = value;
        self
    }

    /// Set computed visibility.
    #[must_use]
    pub fn visibility(mut self, value: Visibility) -> Self {
        self.visibility = value;
        self
    }

    /// Set computed opacity.
    #[must_use]
    pub fn opacity(mut self, value: f32) -> Self {
        self.opacity = value;
        self
    }

    /// Mark the element fixed-positioned.
    #[must_use]
    pub fn fixed(mut self) -> Self {
        self.fixed = true;
        self
    }

    /// Set layout box extents.
    #[must_use]
    pub fn size(mut self, width: u16, height: u16) -> Self {
        self.size = (width, height);
        self
    }

    /// Show playback controls (media elements).
    #[must_use]
    pub fn with_controls(mut self) -> Self {
        if let ElementKind::Media { controls } = &mut self.kind {
            *controls = true;
        }
        self
    }

    /// Whether this element's own attributes make it a Tab stop.
    ///
    /// Rendering (display/visibility/opacity/layout) is judged separately by
    /// the tree, which can see the ancestor chain.
    #[must_use]
    pub fn is_focus_eligible(&self) -> bool {
        if self.disabled {
            return false;
        }
        if matches!(self.tab_index, Some(t) if t < 0) {
            return false;
        }
        let by_kind = match self.kind {
            ElementKind::Block => false,
            ElementKind::Link { has_href } => has_href,
            ElementKind::Button
            | ElementKind::TextInput
            | ElementKind::TextArea
            | ElementKind::Select => true,
            ElementKind::Media { controls } => controls,
            ElementKind::Editable { enabled } => enabled,
        };
        by_kind || matches!(self.tab_index, Some(t) if t >= 0)
    }
}
