//! Code block component with a copy-to-clipboard button.

use gloo_timers::callback::Timeout;
use portfolio_types::CopyAck;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

/// Properties for CodeBlock component.
#[derive(Properties, PartialEq)]
pub struct CodeBlockProps {
    pub code: String,
}

/// Code block component.
///
/// Clicking "Copy" puts the exact snippet on the clipboard and shows
/// "Copied!" for two seconds. Clicking again restarts the two seconds.
#[function_component(CodeBlock)]
pub fn code_block(props: &CodeBlockProps) -> Html {
    let ack = use_mut_ref(CopyAck::new);
    let pending = use_mut_ref(|| None::<Timeout>);
    let rerender = use_force_update();

    let onclick = {
        let ack = ack.clone();
        let pending = pending.clone();
        let rerender = rerender.clone();
        let code = props.code.clone();

        Callback::from(move |_: MouseEvent| {
            write_clipboard(&code);

            let ticket = ack.borrow_mut().trigger();
            rerender.force_update();

            let ack = ack.clone();
            let rerender = rerender.clone();
            let revert = Timeout::new(ticket.delay_ms(), move || {
                let changed = ack.borrow_mut().expire(ticket);
                if changed {
                    rerender.force_update();
                }
            });

            // Dropping the previous timeout cancels it
            *pending.borrow_mut() = Some(revert);
        })
    };

    let label = ack.borrow().state().label();

    html! {
        <div class="codeblock">
            <button class="copy-button" {onclick}>
                { label }
            </button>
            <pre>
                <code>{ &props.code }</code>
            </pre>
        </div>
    }
}

fn write_clipboard(text: &str) {
    let Some(window) = web_sys::window() else {
        log::warn!("No window available, cannot copy");
        return;
    };

    let clipboard = window.navigator().clipboard();
    if clipboard.is_undefined() {
        log::warn!("Clipboard API unavailable (insecure context?)");
        return;
    }

    let promise = clipboard.write_text(text);
    wasm_bindgen_futures::spawn_local(async move {
        if let Err(e) = JsFuture::from(promise).await {
            log::warn!("Clipboard write rejected: {:?}", e);
        }
    });
}
