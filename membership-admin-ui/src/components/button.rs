use dioxus::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
}

impl ButtonVariant {
    fn class(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "button primary",
            ButtonVariant::Secondary => "button secondary",
            ButtonVariant::Danger => "button danger",
        }
    }
}

#[component]
pub fn Button(
    #[props(default)] variant: ButtonVariant,
    #[props(default)] disabled: bool,
    #[props(default)] small: bool,
    onclick: EventHandler<MouseEvent>,
    children: Element,
) -> Element {
    let class = if small {
        format!("{} small", variant.class())
    } else {
        variant.class().to_string()
    };

    rsx! {
        button {
            class: "{class}",
            r#type: "button",
            disabled: disabled,
            onclick: move |e| onclick.call(e),
            {children}
        }
    }
}
