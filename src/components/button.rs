use yew::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonVariant {
    #[default]
    Default,
    Outline,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ButtonSize {
    Sm,
    #[default]
    Default,
    Lg,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Default => "btn-default",
            ButtonVariant::Outline => "btn-outline",
        }
    }
}

impl ButtonSize {
    fn class(self) -> &'static str {
        match self {
            ButtonSize::Sm => "btn-sm",
            ButtonSize::Default => "btn-md",
            ButtonSize::Lg => "btn-lg",
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ButtonProps {
    #[prop_or_default]
    pub variant: ButtonVariant,
    #[prop_or_default]
    pub size: ButtonSize,
    #[prop_or_default]
    pub classes: Classes,
    #[prop_or_default]
    pub onclick: Option<Callback<MouseEvent>>,
    #[prop_or_default]
    pub children: Children,
}

pub fn button_classes(variant: ButtonVariant, size: ButtonSize, extra: &Classes) -> Classes {
    classes!("btn", variant.class(), size.class(), extra.clone())
}

#[function_component(Button)]
pub fn button(props: &ButtonProps) -> Html {
    let onclick = props.onclick.clone();
    html! {
        <button
            type="button"
            class={button_classes(props.variant, props.size, &props.classes)}
            onclick={move |e: MouseEvent| {
                if let Some(onclick) = &onclick {
                    onclick.emit(e);
                }
            }}
        >
            { for props.children.iter() }
        </button>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes_follow_variant_and_size() {
        let classes = button_classes(ButtonVariant::Outline, ButtonSize::Lg, &classes!("rounded"));
        assert_eq!(classes.to_string(), "btn btn-outline btn-lg rounded");

        let classes = button_classes(ButtonVariant::default(), ButtonSize::default(), &Classes::new());
        assert_eq!(classes.to_string(), "btn btn-default btn-md");
    }
}
