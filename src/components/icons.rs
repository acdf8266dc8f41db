use dioxus::prelude::*;

/// Inline svg glyphs on a 24px grid, stroked with the current text color.
#[component]
pub fn Icon(name: String, class: String) -> Element {
    // The loader carries its own animation class.
    let class = if name == "loader" {
        format!("{class} spin")
    } else {
        class
    };

    rsx! {
        svg {
            class: "{class}",
            view_box: "0 0 24 24",
            fill: "none",
            stroke: "currentColor",
            stroke_width: "2",
            stroke_linecap: "round",
            stroke_linejoin: "round",
            {glyph(&name)}
        }
    }
}

fn glyph(name: &str) -> Element {
    match name {
        "arrow-up" => rsx! {
            line { x1: "12", y1: "19", x2: "12", y2: "5" }
            polyline { points: "5 12 12 5 19 12" }
        },
        "arrow-down" => rsx! {
            line { x1: "12", y1: "5", x2: "12", y2: "19" }
            polyline { points: "19 12 12 19 5 12" }
        },
        "comment" => rsx! {
            path { d: "M21 15a2 2 0 0 1-2 2H7l-4 4V5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2z" }
        },
        "playlist" => rsx! {
            path { d: "M21 15V6" }
            path { d: "M18.5 18a2.5 2.5 0 1 0 0-5 2.5 2.5 0 0 0 0 5Z" }
            path { d: "M12 12H3" }
            path { d: "M16 6H3" }
            path { d: "M12 18H3" }
        },
        "music" => rsx! {
            path { d: "M9 18V5l12-2v13" }
            circle { cx: "6", cy: "18", r: "3" }
            circle { cx: "18", cy: "16", r: "3" }
        },
        "plus" => rsx! {
            line { x1: "12", y1: "5", x2: "12", y2: "19" }
            line { x1: "5", y1: "12", x2: "19", y2: "12" }
        },
        "check" => rsx! {
            polyline { points: "20 6 9 17 4 12" }
        },
        "trash" => rsx! {
            polyline { points: "3 6 5 6 21 6" }
            path { d: "M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6m3 0V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2" }
        },
        "loader" => rsx! {
            circle { cx: "12", cy: "12", r: "10", opacity: "0.25" }
            path { d: "M12 2a10 10 0 0 1 10 10", opacity: "0.75" }
        },
        "clock" => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
            polyline { points: "12 6 12 12 16 14" }
        },
        _ => rsx! {
            circle { cx: "12", cy: "12", r: "10" }
        },
    }
}
