//! `theme.duckred`: black panels with saturated red accents and square corners.

#![allow(clippy::excessive_precision)]

use sigil_engine::coords::{ColorRgba, Vec2};

use crate::style::{Dir, StyleColor, StyleMetrics};

use super::ThemePreset;

pub static DUCKRED: ThemePreset = ThemePreset {
    id: "theme.duckred",
    name: "DuckRed",
    metrics: StyleMetrics {
        alpha: 1.0,
        disabled_alpha: 0.6000000238418579,
        window_padding: Vec2::new(8.0, 8.0),
        window_rounding: 0.0,
        window_border_size: 1.0,
        window_min_size: Vec2::new(32.0, 32.0),
        window_title_align: Vec2::new(0.5, 0.5),
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
        scrollbar_rounding: 0.0,
        grab_min_size: 10.0,
        grab_rounding: 0.0,
        tab_rounding: 0.0,
        tab_border_size: 0.0,
        tab_min_width_for_close_button: 0.0,
        color_button_position: Dir::Right,
        button_text_align: Vec2::new(0.5, 0.5),
        selectable_text_align: Vec2::new(0.0, 0.0),
    },
    colors: &[
        (StyleColor::Text, ColorRgba::new(1.0, 1.0, 1.0, 1.0)),
        (StyleColor::TextDisabled, ColorRgba::new(0.4980392158031464, 0.4980392158031464, 0.4980392158031464, 1.0)),
        (StyleColor::WindowBg, ColorRgba::new(0.03921568766236305, 0.03921568766236305, 0.03921568766236305, 1.0)),
        (StyleColor::ChildBg, ColorRgba::new(0.05490196123719215, 0.05490196123719215, 0.05490196123719215, 1.0)),
        (StyleColor::PopupBg, ColorRgba::new(0.0, 0.0, 0.0, 1.0)),
        (StyleColor::Border, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::BorderShadow, ColorRgba::new(0.0, 0.0, 0.0, 1.0)),
        (StyleColor::FrameBg, ColorRgba::new(0.1176470592617989, 0.1176470592617989, 0.1176470592617989, 1.0)),
        (StyleColor::FrameBgHovered, ColorRgba::new(1.0, 0.0, 0.0, 0.5647059082984924)),
        (StyleColor::FrameBgActive, ColorRgba::new(1.0, 0.0, 0.0, 0.5647059082984924)),
        (StyleColor::TitleBg, ColorRgba::new(0.0, 0.0, 0.0, 1.0)),
        (StyleColor::TitleBgActive, ColorRgba::new(0.03921568766236305, 0.03921568766236305, 0.03921568766236305, 1.0)),
        (StyleColor::TitleBgCollapsed, ColorRgba::new(0.0, 0.0, 0.0, 0.0)),
        (StyleColor::MenuBarBg, ColorRgba::new(0.0784313753247261, 0.0784313753247261, 0.0784313753247261, 0.9411764740943909)),
        (StyleColor::ScrollbarBg, ColorRgba::new(1.0, 0.0, 0.0, 0.5647059082984924)),
        (StyleColor::ScrollbarGrab, ColorRgba::new(1.0, 0.0, 0.0, 0.501960813999176)),
        (StyleColor::ScrollbarGrabHovered, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::ScrollbarGrabActive, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::CheckMark, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::SliderGrab, ColorRgba::new(1.0, 0.0, 0.0, 0.8154506683349609)),
        (StyleColor::SliderGrabActive, ColorRgba::new(1.0, 0.0, 0.0, 0.8156862854957581)),
        (StyleColor::Button, ColorRgba::new(1.0, 0.0, 0.0, 0.501960813999176)),
        (StyleColor::ButtonHovered, ColorRgba::new(1.0, 0.0, 0.0, 0.7450980544090271)),
        (StyleColor::ButtonActive, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::Header, ColorRgba::new(1.0, 0.0, 0.0, 0.6566523313522339)),
        (StyleColor::HeaderHovered, ColorRgba::new(1.0, 0.0, 0.0, 0.8039215803146362)),
        (StyleColor::HeaderActive, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::Separator, ColorRgba::new(0.0784313753247261, 0.0784313753247261, 0.0784313753247261, 0.501960813999176)),
        (StyleColor::SeparatorHovered, ColorRgba::new(0.0784313753247261, 0.0784313753247261, 0.0784313753247261, 0.6695278882980347)),
        (StyleColor::SeparatorActive, ColorRgba::new(0.0784313753247261, 0.0784313753247261, 0.0784313753247261, 0.9570815563201904)),
        (StyleColor::ResizeGrip, ColorRgba::new(0.1019607856869698, 0.1137254908680916, 0.1294117718935013, 0.2000000029802322)),
        (StyleColor::ResizeGripHovered, ColorRgba::new(0.2039215713739395, 0.2078431397676468, 0.2156862765550613, 0.2000000029802322)),
        (StyleColor::ResizeGripActive, ColorRgba::new(0.3019607961177826, 0.3019607961177826, 0.3019607961177826, 0.2000000029802322)),
        (StyleColor::Tab, ColorRgba::new(1.0, 0.0, 0.0, 0.4392156898975372)),
        (StyleColor::TabHovered, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::PlotLines, ColorRgba::new(0.6078431606292725, 0.6078431606292725, 0.6078431606292725, 1.0)),
        (StyleColor::PlotLinesHovered, ColorRgba::new(0.9490196108818054, 0.3450980484485626, 0.3450980484485626, 1.0)),
        (StyleColor::PlotHistogram, ColorRgba::new(0.9490196108818054, 0.3450980484485626, 0.3450980484485626, 1.0)),
        (StyleColor::PlotHistogramHovered, ColorRgba::new(0.4274509847164154, 0.3607843220233917, 0.3607843220233917, 1.0)),
        (StyleColor::TableHeaderBg, ColorRgba::new(1.0, 0.0, 0.0, 0.7124463319778442)),
        (StyleColor::TableBorderStrong, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::TableBorderLight, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::TableRowBg, ColorRgba::new(0.0, 0.0, 0.0, 1.0)),
        (StyleColor::TableRowBgAlt, ColorRgba::new(0.196078434586525, 0.196078434586525, 0.196078434586525, 0.6274510025978088)),
        (StyleColor::TextSelectedBg, ColorRgba::new(1.0, 0.0, 0.0, 1.0)),
        (StyleColor::DragDropTarget, ColorRgba::new(0.2588235437870026, 0.2705882489681244, 0.3803921639919281, 1.0)),
        (StyleColor::NavWindowingHighlight, ColorRgba::new(1.0, 1.0, 1.0, 0.699999988079071)),
        (StyleColor::NavWindowingDimBg, ColorRgba::new(0.800000011920929, 0.800000011920929, 0.800000011920929, 0.2000000029802322)),
        (StyleColor::ModalWindowDimBg, ColorRgba::new(0.800000011920929, 0.800000011920929, 0.800000011920929, 0.3499999940395355)),
    ],
};
