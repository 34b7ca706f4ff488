//! Toasts for the context's success and error messages
//!
//! Each message clears itself on a timer (see `AppContext::show_success`);
//! clicking it clears it early.

use leptos::*;

use crate::state::use_app_context;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Tone {
    Success,
    Error,
}

impl Tone {
    fn icon(self) -> &'static str {
        match self {
            Tone::Success => "🌱",
            Tone::Error => "⚠️",
        }
    }

    /// Errors interrupt screen readers; confirmations wait their turn
    fn aria_role(self) -> &'static str {
        match self {
            Tone::Success => "status",
            Tone::Error => "alert",
        }
    }

    fn class(self) -> &'static str {
        match self {
            Tone::Success => "bg-emerald-600 border-emerald-700",
            Tone::Error => "bg-red-600 border-red-700",
        }
    }
}

#[component]
pub fn Toast() -> impl IntoView {
    let ctx = use_app_context();

    view! {
        <div class="fixed bottom-6 right-4 z-50 space-y-2 max-w-sm">
            <Notice message=ctx.success tone=Tone::Success />
            <Notice message=ctx.error tone=Tone::Error />
        </div>
    }
}

#[component]
fn Notice(message: RwSignal<Option<String>>, tone: Tone) -> impl IntoView {
    move || {
        message.get().map(|text| view! {
            <button
                type="button"
                role=tone.aria_role()
                title="Dismiss"
                on:click=move |_| message.set(None)
                class=format!(
                    "w-full flex items-center gap-3 text-left text-white px-4 py-3 rounded-xl border shadow-lg animate-slide-in {}",
                    tone.class()
                )
            >
                <span class="text-lg">{tone.icon()}</span>
                <span class="text-sm font-medium flex-1">{text}</span>
                <span class="text-xs opacity-70">"✕"</span>
            </button>
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_errors_are_announced_as_alerts() {
        assert_eq!(Tone::Error.aria_role(), "alert");
        assert_eq!(Tone::Success.aria_role(), "status");
        assert_ne!(Tone::Success.class(), Tone::Error.class());
    }
}
