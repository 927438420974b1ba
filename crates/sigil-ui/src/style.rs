//! Host style object: scalar metrics plus a color table indexed by UI role.
//!
//! Themes write into a [`Style`] passed by `&mut`; the GUI host copies it into its
//! own global style once per change.

use core::ops::{Index, IndexMut};

use sigil_engine::coords::{ColorRgba, Vec2};

/// Cardinal direction, used for button placement.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum Dir {
    #[default]
    None,
    Left,
    Right,
    Up,
    Down,
}

macro_rules! style_colors {
    ($($(#[$doc:meta])* $variant:ident),+ $(,)?) => {
        /// Closed set of UI element roles that own an entry in the color table.
        #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
        pub enum StyleColor {
            $($(#[$doc])* $variant,)+
        }

        impl StyleColor {
            /// Every role, in table order.
            pub const ALL: &'static [StyleColor] = &[$(StyleColor::$variant,)+];

            /// Number of entries in a style color table.
            pub const COUNT: usize = Self::ALL.len();

            pub const fn name(self) -> &'static str {
                match self {
                    $(StyleColor::$variant => stringify!($variant),)+
                }
            }
        }
    };
}

style_colors! {
    Text,
    TextDisabled,
    /// Background of normal windows.
    WindowBg,
    /// Background of child windows.
    ChildBg,
    /// Background of popups, menus, tooltips.
    PopupBg,
    Border,
    BorderShadow,
    /// Background of checkboxes, radio buttons, sliders, text inputs.
    FrameBg,
    FrameBgHovered,
    FrameBgActive,
    TitleBg,
    TitleBgActive,
    TitleBgCollapsed,
    MenuBarBg,
    ScrollbarBg,
    ScrollbarGrab,
    ScrollbarGrabHovered,
    ScrollbarGrabActive,
    CheckMark,
    SliderGrab,
    SliderGrabActive,
    Button,
    ButtonHovered,
    ButtonActive,
    /// Collapsing headers, tree nodes, selectables, menu items.
    Header,
    HeaderHovered,
    HeaderActive,
    Separator,
    SeparatorHovered,
    SeparatorActive,
    ResizeGrip,
    ResizeGripHovered,
    ResizeGripActive,
    Tab,
    TabHovered,
    TabActive,
    TabUnfocused,
    TabUnfocusedActive,
    PlotLines,
    PlotLinesHovered,
    PlotHistogram,
    PlotHistogramHovered,
    TableHeaderBg,
    /// Table outer and header borders.
    TableBorderStrong,
    /// Table inner borders.
    TableBorderLight,
    TableRowBg,
    TableRowBgAlt,
    TextSelectedBg,
    DragDropTarget,
    NavHighlight,
    NavWindowingHighlight,
    NavWindowingDimBg,
    /// Darkens the area behind a modal window.
    ModalWindowDimBg,
}

impl StyleColor {
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

/// Scalar and vector style parameters.
///
/// Sizes are in pixels, alignments in `[0, 1]` per axis (0.5 = centered).
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct StyleMetrics {
    pub alpha: f32,
    /// Extra alpha multiplier for disabled widgets.
    pub disabled_alpha: f32,
    pub window_padding: Vec2,
    pub window_rounding: f32,
    pub window_border_size: f32,
    pub window_min_size: Vec2,
    pub window_title_align: Vec2,
    pub window_menu_button_position: Dir,
    pub child_rounding: f32,
    pub child_border_size: f32,
    pub popup_rounding: f32,
    pub popup_border_size: f32,
    pub frame_padding: Vec2,
    pub frame_rounding: f32,
    pub frame_border_size: f32,
    pub item_spacing: Vec2,
    pub item_inner_spacing: Vec2,
    pub cell_padding: Vec2,
    pub indent_spacing: f32,
    pub columns_min_spacing: f32,
    pub scrollbar_size: f32,
    pub scrollbar_rounding: f32,
    pub grab_min_size: f32,
    pub grab_rounding: f32,
    pub tab_rounding: f32,
    pub tab_border_size: f32,
    /// `0.0` shows the close button only on the active tab.
    pub tab_min_width_for_close_button: f32,
    pub color_button_position: Dir,
    pub button_text_align: Vec2,
    pub selectable_text_align: Vec2,
}

impl StyleMetrics {
    /// The host's stock values.
    pub const STOCK: Self = Self {
        alpha: 1.0,
        disabled_alpha: 0.6,
        window_padding: Vec2::new(8.0, 8.0),
        window_rounding: 0.0,
        window_border_size: 1.0,
        window_min_size: Vec2::new(32.0, 32.0),
        window_title_align: Vec2::new(0.0, 0.5),
        window_menu_button_position: Dir::Left,
        child_rounding: 0.0,
        child_border_size: 1.0,
        popup_rounding: 0.0,
        popup_border_size: 1.0,
        frame_padding: Vec2::new(4.0, 3.0),
        frame_rounding: 0.0,
        frame_border_size: 0.0,
        item_spacing: Vec2::new(8.0, 4.0),
        item_inner_spacing: Vec2::new(4.0, 4.0),
        cell_padding: Vec2::new(4.0, 2.0),
        indent_spacing: 21.0,
        columns_min_spacing: 6.0,
        scrollbar_size: 14.0,
        scrollbar_rounding: 9.0,
        grab_min_size: 12.0,
        grab_rounding: 0.0,
        tab_rounding: 4.0,
        tab_border_size: 0.0,
        tab_min_width_for_close_button: 0.0,
        color_button_position: Dir::Right,
        button_text_align: Vec2::new(0.5, 0.5),
        selectable_text_align: Vec2::new(0.0, 0.0),
    };
}

impl Default for StyleMetrics {
    fn default() -> Self {
        Self::STOCK
    }
}

/// Complete style state: metrics plus one color per [`StyleColor`].
#[derive(Debug, Clone, PartialEq)]
pub struct Style {
    pub metrics: StyleMetrics,
    pub colors: [ColorRgba; StyleColor::COUNT],
}

impl Default for Style {
    /// Stock metrics and a fully transparent color table.
    fn default() -> Self {
        Self {
            metrics: StyleMetrics::STOCK,
            colors: [ColorRgba::transparent(); StyleColor::COUNT],
        }
    }
}

impl Style {
    #[inline]
    pub fn color(&self, role: StyleColor) -> ColorRgba {
        self.colors[role.index()]
    }

    #[inline]
    pub fn set_color(&mut self, role: StyleColor, color: ColorRgba) {
        self.colors[role.index()] = color;
    }

    #[inline]
    pub fn metrics(&self) -> &StyleMetrics {
        &self.metrics
    }

    #[inline]
    pub fn set_metrics(&mut self, metrics: StyleMetrics) {
        self.metrics = metrics;
    }
}

impl Index<StyleColor> for Style {
    type Output = ColorRgba;

    #[inline]
    fn index(&self, role: StyleColor) -> &ColorRgba {
        &self.colors[role.index()]
    }
}

impl IndexMut<StyleColor> for Style {
    #[inline]
    fn index_mut(&mut self, role: StyleColor) -> &mut ColorRgba {
        &mut self.colors[role.index()]
    }
}
