use contracts::shared::mutation::ConfirmState;
use leptos::prelude::*;
use thaw::*;

/// Yes/no dialog driven by a `ConfirmState`.
///
/// `on_confirm` only fires from the confirm button; closing the dialog any
/// other way cancels.
#[component]
pub fn ConfirmDialog(
    confirm: RwSignal<ConfirmState>,
    #[prop(into)]
    title: String,
    on_confirm: Callback<()>,
    #[prop(optional)]
    confirm_text: &'static str,
) -> impl IntoView {
    let open = RwSignal::new(false);

    Effect::new(move |_| {
        let pending = confirm.with(|c| c.is_pending());
        if open.get_untracked() != pending {
            open.set(pending);
        }
    });
    Effect::new(move |_| {
        if !open.get() && confirm.with_untracked(|c| c.is_pending()) {
            confirm.update(|c| c.cancel());
        }
    });

    let confirm_text = if confirm_text.is_empty() { "Delete" } else { confirm_text };

    view! {
        <Dialog open=open>
            <DialogSurface>
                <DialogBody>
                    <DialogTitle>{title}</DialogTitle>
                    <DialogContent>
                        {move || {
                            confirm
                                .with(|c| c.label().map(str::to_string))
                                .map(|label| format!("\"{}\" will be removed permanently.", label))
                        }}
                    </DialogContent>
                    <DialogActions>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=move |_| on_confirm.run(())
                        >
                            {confirm_text}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Subtle
                            on_click=move |_| confirm.update(|c| c.cancel())
                        >
                            "Cancel"
                        </Button>
                    </DialogActions>
                </DialogBody>
            </DialogSurface>
        </Dialog>
    }
}
