use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    Box,
    ClipboardList,
    Eye,
    Instagram,
    Linkedin,
    Maximize,
    Menu,
    Paintbrush,
    Palette,
    PenTool,
    Play,
    Save,
    Sparkles,
    Twitter,
    UserCircle,
    X,
}

enum Shape {
    Path(&'static str),
    Circle(f32, f32, f32),
    Rect(f32, f32, f32, f32, f32),
    Line(f32, f32, f32, f32),
    Polygon(&'static str),
}

use Shape::*;

impl Icon {
    fn shapes(self) -> &'static [Shape] {
        match self {
            Icon::ArrowRight => &[Path("M5 12h14"), Path("m12 5 7 7-7 7")],
            Icon::Box => &[
                Path("M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z"),
                Path("m3.3 7 8.7 5 8.7-5"),
                Path("M12 22V12"),
            ],
            Icon::ClipboardList => &[
                Rect(8.0, 2.0, 8.0, 4.0, 1.0),
                Path("M16 4h2a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H6a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2h2"),
                Path("M12 11h4"),
                Path("M12 16h4"),
                Path("M8 11h.01"),
                Path("M8 16h.01"),
            ],
            Icon::Eye => &[
                Path("M2.062 12.348a1 1 0 0 1 0-.696 10.75 10.75 0 0 1 19.876 0 1 1 0 0 1 0 .696 10.75 10.75 0 0 1-19.876 0"),
                Circle(12.0, 12.0, 3.0),
            ],
            Icon::Instagram => &[
                Rect(2.0, 2.0, 20.0, 20.0, 5.0),
                Path("M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z"),
                Line(17.5, 6.5, 17.51, 6.5),
            ],
            Icon::Linkedin => &[
                Path("M16 8a6 6 0 0 1 6 6v7h-4v-7a2 2 0 0 0-2-2 2 2 0 0 0-2 2v7h-4v-7a6 6 0 0 1 6-6z"),
                Rect(2.0, 9.0, 4.0, 12.0, 0.0),
                Circle(4.0, 4.0, 2.0),
            ],
            Icon::Maximize => &[
                Path("M8 3H5a2 2 0 0 0-2 2v3"),
                Path("M21 8V5a2 2 0 0 0-2-2h-3"),
                Path("M3 16v3a2 2 0 0 0 2 2h3"),
                Path("M16 21h3a2 2 0 0 0 2-2v-3"),
            ],
            Icon::Menu => &[
                Line(4.0, 6.0, 20.0, 6.0),
                Line(4.0, 12.0, 20.0, 12.0),
                Line(4.0, 18.0, 20.0, 18.0),
            ],
            Icon::Paintbrush => &[
                Path("m14.622 17.897-10.68-2.913"),
                Path("M18.376 2.622a1 1 0 1 1 3.002 3.002L17.36 9.643a.5.5 0 0 0 0 .707l.944.944a2.41 2.41 0 0 1 0 3.408l-.944.944a.5.5 0 0 1-.707 0L8.354 7.348a.5.5 0 0 1 0-.707l.944-.944a2.41 2.41 0 0 1 3.408 0l.944.944a.5.5 0 0 0 .707 0z"),
                Path("M9 8c-1.804 2.71-3.97 3.46-6.583 3.948a.507.507 0 0 0-.302.819l7.32 8.883a1 1 0 0 0 1.185.204C12.735 20.405 16 16.792 16 15"),
            ],
            Icon::Palette => &[
                Circle(13.5, 6.5, 0.5),
                Circle(17.5, 10.5, 0.5),
                Circle(8.5, 7.5, 0.5),
                Circle(6.5, 12.5, 0.5),
                Path("M12 2C6.5 2 2 6.5 2 12s4.5 10 10 10c.926 0 1.648-.746 1.648-1.688 0-.437-.18-.835-.437-1.125-.29-.289-.438-.652-.438-1.125a1.64 1.64 0 0 1 1.668-1.668h1.996c3.051 0 5.555-2.503 5.555-5.554C21.965 6.012 17.461 2 12 2z"),
            ],
            Icon::PenTool => &[
                Path("M15.707 21.293a1 1 0 0 1-1.414 0l-1.586-1.586a1 1 0 0 1 0-1.414l5.586-5.586a1 1 0 0 1 1.414 0l1.586 1.586a1 1 0 0 1 0 1.414z"),
                Path("m18 13-1.375-6.874a1 1 0 0 0-.746-.776L3.235 2.028a1 1 0 0 0-1.207 1.207L5.35 15.879a1 1 0 0 0 .776.746L13 18"),
                Path("m2.3 2.3 7.286 7.286"),
                Circle(11.0, 11.0, 2.0),
            ],
            Icon::Play => &[Polygon("6 3 20 12 6 21 6 3")],
            Icon::Save => &[
                Path("M15.2 3a2 2 0 0 1 1.4.6l3.8 3.8a2 2 0 0 1 .6 1.4V19a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2z"),
                Path("M17 21v-7a1 1 0 0 0-1-1H8a1 1 0 0 0-1 1v7"),
                Path("M7 3v4a1 1 0 0 0 1 1h7"),
            ],
            Icon::Sparkles => &[
                Path("M9.937 15.5A2 2 0 0 0 8.5 14.063l-6.135-1.582a.5.5 0 0 1 0-.962L8.5 9.936A2 2 0 0 0 9.937 8.5l1.582-6.135a.5.5 0 0 1 .963 0L14.063 8.5A2 2 0 0 0 15.5 9.937l6.135 1.581a.5.5 0 0 1 0 .964L15.5 14.063a2 2 0 0 0-1.437 1.437l-1.582 6.135a.5.5 0 0 1-.963 0z"),
                Path("M20 3v4"),
                Path("M22 5h-4"),
            ],
            Icon::Twitter => &[Path(
                "M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z",
            )],
            Icon::UserCircle => &[
                Circle(12.0, 12.0, 10.0),
                Circle(12.0, 10.0, 3.0),
                Path("M7 20.662V19a2 2 0 0 1 2-2h6a2 2 0 0 1 2 2v1.662"),
            ],
            Icon::X => &[Path("M18 6 6 18"), Path("m6 6 12 12")],
        }
    }
}

fn render_shape(shape: &Shape) -> Html {
    match *shape {
        Path(d) => html! { <path d={d} /> },
        Circle(cx, cy, r) => html! {
            <circle cx={cx.to_string()} cy={cy.to_string()} r={r.to_string()} />
        },
        Rect(x, y, width, height, rx) => html! {
            <rect x={x.to_string()} y={y.to_string()} width={width.to_string()}
                height={height.to_string()} rx={rx.to_string()} />
        },
        Line(x1, y1, x2, y2) => html! {
            <line x1={x1.to_string()} y1={y1.to_string()} x2={x2.to_string()} y2={y2.to_string()} />
        },
        Polygon(points) => html! { <polygon points={points} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct IconGlyphProps {
    pub icon: Icon,
    #[prop_or(24)]
    pub size: u32,
    #[prop_or_default]
    pub classes: Classes,
}

/// Stroke icon rendered as inline SVG.
#[function_component(IconGlyph)]
pub fn icon_glyph(props: &IconGlyphProps) -> Html {
    let size = props.size.to_string();
    html! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            class={classes!("icon", props.classes.clone())}
            width={size.clone()}
            height={size}
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
        >
            { for props.icon.shapes().iter().map(render_shape) }
        </svg>
    }
}
