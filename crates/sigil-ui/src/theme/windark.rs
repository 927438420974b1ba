//! `theme.windark`: neutral dark gray with blue accents and rounded windows.

#![allow(clippy::excessive_precision)]

use sigil_engine::coords::{ColorRgba, Vec2};

use crate::style::{Dir, StyleColor, StyleMetrics};

use super::ThemePreset;

pub static WINDARK: ThemePreset = ThemePreset {
    id: "theme.windark",
    name: "Windark",
    metrics: StyleMetrics {
        alpha: 1.0,
        disabled_alpha: 0.6000000238418579,
        window_padding: Vec2::new(8.0, 8.0),
        window_rounding: 8.399999618530273,
        window_border_size: 1.0,
        window_min_size: Vec2::new(32.0, 32.0),
        window_title_align: Vec2::new(0.0, 0.5),
        window_menu_button_position: Dir::Right,
        child_rounding: 3.0,
        child_border_size: 1.0,
        popup_rounding: 3.0,
        popup_border_size: 1.0,
        frame_padding: Vec2::new(4.0, 3.0),
        frame_rounding: 3.0,
        frame_border_size: 1.0,
        item_spacing: Vec2::new(8.0, 4.0),
        item_inner_spacing: Vec2::new(4.0, 4.0),
        cell_padding: Vec2::new(4.0, 2.0),
        indent_spacing: 21.0,
        columns_min_spacing: 6.0,
        scrollbar_size: 5.599999904632568,
        scrollbar_rounding: 18.0,
        grab_min_size: 10.0,
        grab_rounding: 3.0,
        tab_rounding: 3.0,
        tab_border_size: 0.0,
        tab_min_width_for_close_button: 0.0,
        color_button_position: Dir::Right,
        button_text_align: Vec2::new(0.5, 0.5),
        selectable_text_align: Vec2::new(0.0, 0.0),
    },
    colors: &[
        (StyleColor::Text, ColorRgba::new(1.0, 1.0, 1.0, 1.0)),
        (StyleColor::TextDisabled, ColorRgba::new(0.6000000238418579, 0.6000000238418579, 0.6000000238418579, 1.0)),
        (StyleColor::WindowBg, ColorRgba::new(0.125490203499794, 0.125490203499794, 0.125490203499794, 1.0)),
        (StyleColor::ChildBg, ColorRgba::new(0.125490203499794, 0.125490203499794, 0.125490203499794, 1.0)),
        (StyleColor::PopupBg, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::Border, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::BorderShadow, ColorRgba::new(0.0, 0.0, 0.0, 0.0)),
        (StyleColor::FrameBg, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::FrameBgHovered, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::FrameBgActive, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::TitleBg, ColorRgba::new(0.125490203499794, 0.125490203499794, 0.125490203499794, 1.0)),
        (StyleColor::TitleBgActive, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::TitleBgCollapsed, ColorRgba::new(0.125490203499794, 0.125490203499794, 0.125490203499794, 1.0)),
        (StyleColor::MenuBarBg, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::ScrollbarBg, ColorRgba::new(0.125490203499794, 0.125490203499794, 0.125490203499794, 1.0)),
        (StyleColor::ScrollbarGrab, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::ScrollbarGrabHovered, ColorRgba::new(0.3019607961177826, 0.3019607961177826, 0.3019607961177826, 1.0)),
        (StyleColor::ScrollbarGrabActive, ColorRgba::new(0.3490196168422699, 0.3490196168422699, 0.3490196168422699, 1.0)),
        (StyleColor::CheckMark, ColorRgba::new(0.0, 0.4705882370471954, 0.843137264251709, 1.0)),
        (StyleColor::SliderGrab, ColorRgba::new(0.0, 0.4705882370471954, 0.843137264251709, 1.0)),
        (StyleColor::SliderGrabActive, ColorRgba::new(0.0, 0.3294117748737335, 0.6000000238418579, 1.0)),
        (StyleColor::Button, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::ButtonHovered, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::ButtonActive, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::Header, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::HeaderHovered, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::HeaderActive, ColorRgba::new(0.3019607961177826, 0.3019607961177826, 0.3019607961177826, 1.0)),
        (StyleColor::Separator, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::SeparatorHovered, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::SeparatorActive, ColorRgba::new(0.3019607961177826, 0.3019607961177826, 0.3019607961177826, 1.0)),
        (StyleColor::ResizeGrip, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::ResizeGripHovered, ColorRgba::new(0.250980406999588, 0.250980406999588, 0.250980406999588, 1.0)),
        (StyleColor::ResizeGripActive, ColorRgba::new(0.3019607961177826, 0.3019607961177826, 0.3019607961177826, 1.0)),
        (StyleColor::Tab, ColorRgba::new(0.168627455830574, 0.168627455830574, 0.168627455830574, 1.0)),
        (StyleColor::TabHovered, ColorRgba::new(0.2156862765550613, 0.2156862765550613, 0.2156862765550613, 1.0)),
        (StyleColor::PlotLines, ColorRgba::new(0.0, 0.4705882370471954, 0.843137264251709, 1.0)),
        (StyleColor::PlotLinesHovered, ColorRgba::new(0.0, 0.3294117748737335, 0.6000000238418579, 1.0)),
        (StyleColor::PlotHistogram, ColorRgba::new(0.0, 0.4705882370471954, 0.843137264251709, 1.0)),
        (StyleColor::PlotHistogramHovered, ColorRgba::new(0.0, 0.3294117748737335, 0.6000000238418579, 1.0)),
        (StyleColor::TableHeaderBg, ColorRgba::new(0.1882352977991104, 0.1882352977991104, 0.2000000029802322, 1.0)),
        (StyleColor::TableBorderStrong, ColorRgba::new(0.3098039329051971, 0.3098039329051971, 0.3490196168422699, 1.0)),
        (StyleColor::TableBorderLight, ColorRgba::new(0.2274509817361832, 0.2274509817361832, 0.2470588237047195, 1.0)),
        (StyleColor::TableRowBg, ColorRgba::new(0.0, 0.0, 0.0, 0.0)),
        (StyleColor::TableRowBgAlt, ColorRgba::new(1.0, 1.0, 1.0, 0.05999999865889549)),
        (StyleColor::TextSelectedBg, ColorRgba::new(0.0, 0.4705882370471954, 0.843137264251709, 1.0)),
        (StyleColor::DragDropTarget, ColorRgba::new(1.0, 1.0, 0.0, 0.8999999761581421)),
        (StyleColor::NavWindowingHighlight, ColorRgba::new(1.0, 1.0, 1.0, 0.699999988079071)),
        (StyleColor::NavWindowingDimBg, ColorRgba::new(0.800000011920929, 0.800000011920929, 0.800000011920929, 0.2000000029802322)),
        (StyleColor::ModalWindowDimBg, ColorRgba::new(0.800000011920929, 0.800000011920929, 0.800000011920929, 0.3499999940395355)),
    ],
};
