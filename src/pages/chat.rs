//! Chat Page
//!
//! Conversation with the AI assistant. The transcript lives only in this
//! page's signals; nothing is persisted across navigations.

use leptos::*;
use pulldown_cmark::{Event, Options, Parser};
use wasm_bindgen::prelude::wasm_bindgen;
use wasm_bindgen::{JsCast, JsValue};

use crate::api;

#[wasm_bindgen]
extern "C" {
    /// highlight.js entry point, loaded from index.html. `catch` so a missing
    /// loader degrades to unhighlighted code blocks instead of trapping.
    #[wasm_bindgen(catch, js_namespace = hljs, js_name = highlightElement)]
    fn hljs_highlight_element(element: &web_sys::Element) -> Result<(), JsValue>;
}

/// One transcript entry
#[derive(Clone, PartialEq)]
struct ChatEntry {
    id: u64,
    role: ChatRole,
    text: String,
}

#[derive(Clone, Copy, PartialEq)]
enum ChatRole {
    User,
    Ai,
    /// Placeholder while the request for this entry is in flight
    Pending,
    Error,
}

/// Chat page component
#[component]
pub fn Chat() -> impl IntoView {
    let (entries, set_entries) = create_signal(Vec::<ChatEntry>::new());
    let (input, set_input) = create_signal(String::new());
    let next_id = create_rw_signal(0_u64);
    let transcript_ref = create_node_ref::<html::Div>();

    // Keep the newest bubble in view
    create_effect(move |_| {
        let _ = entries.get().len();

        if let Some(el) = transcript_ref.get() {
            let scroll_height = el.scroll_height();
            el.set_scroll_top(scroll_height);
        }
    });

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();

        let message = input.get().trim().to_string();
        if message.is_empty() {
            return;
        }

        let user_id = next_id.get();
        let pending_id = user_id + 1;
        next_id.set(user_id + 2);

        set_entries.update(|list| {
            list.push(ChatEntry {
                id: user_id,
                role: ChatRole::User,
                text: message.clone(),
            });
            list.push(ChatEntry {
                id: pending_id,
                role: ChatRole::Pending,
                text: String::new(),
            });
        });
        set_input.set(String::new());

        spawn_local(async move {
            let outcome = api::send_chat_message(&message).await;

            // Each request resolves its own placeholder; overlapping
            // submissions may finish out of order.
            set_entries.update(|list| {
                if let Some(entry) = list.iter_mut().find(|e| e.id == pending_id) {
                    match outcome {
                        Ok(reply) => {
                            entry.role = ChatRole::Ai;
                            entry.text = reply;
                        }
                        Err(e) => {
                            entry.role = ChatRole::Error;
                            entry.text = e;
                        }
                    }
                }
            });
        });
    };

    view! {
        <div class="max-w-3xl mx-auto flex flex-col h-[calc(100vh-10rem)]">
            <div>
                <h1 class="text-3xl font-bold">"Assistant"</h1>
                <p class="text-gray-400 mt-1">"Ask anything about your order or our service"</p>
            </div>

            // Transcript
            <div
                node_ref=transcript_ref
                class="flex-1 overflow-y-auto mt-6 space-y-3 pr-2"
            >
                {move || {
                    if entries.get().is_empty() {
                        view! {
                            <div class="text-center text-gray-400 py-16">
                                <div class="text-5xl mb-4">"👋"</div>
                                <p>"Hi! How can I help you today?"</p>
                            </div>
                        }.into_view()
                    } else {
                        entries.get()
                            .into_iter()
                            .map(|entry| view! { <ChatBubble entry=entry /> })
                            .collect_view()
                    }
                }}
            </div>

            // Input row
            <form on:submit=on_submit class="mt-4 flex space-x-2">
                <input
                    type="text"
                    placeholder="Type a message..."
                    prop:value=move || input.get()
                    on:input=move |ev| set_input.set(event_target_value(&ev))
                    class="flex-1 bg-gray-800 rounded-lg px-4 py-3
                           border border-gray-700 focus:border-primary-500 focus:outline-none"
                />
                <button
                    type="submit"
                    class="px-6 py-3 bg-primary-600 hover:bg-primary-700 rounded-lg
                           font-medium transition-colors"
                >
                    "Send"
                </button>
            </form>
        </div>
    }
}

/// One rendered message bubble
#[component]
fn ChatBubble(entry: ChatEntry) -> impl IntoView {
    let (align, bubble_class) = match entry.role {
        ChatRole::User => ("justify-end", "bg-primary-600 text-white"),
        ChatRole::Ai | ChatRole::Pending => ("justify-start", "bg-gray-800 border border-gray-700"),
        ChatRole::Error => ("justify-start", "bg-red-900/40 border border-red-700 text-red-200"),
    };

    view! {
        <div class=format!("flex {}", align)>
            <div class=format!("max-w-[85%] rounded-2xl px-4 py-3 shadow {}", bubble_class)>
                {match entry.role {
                    ChatRole::Ai => {
                        let rendered = render_markdown(&entry.text);
                        let body_ref = create_node_ref::<html::Div>();

                        // Colorize code blocks once the markdown is in the DOM
                        create_effect(move |_| {
                            if let Some(el) = body_ref.get() {
                                highlight_code_blocks(&el);
                            }
                        });

                        view! {
                            <div class="markdown-body" node_ref=body_ref inner_html=rendered />
                        }.into_view()
                    }
                    ChatRole::Pending => view! {
                        <span class="text-gray-400 animate-pulse">"Thinking..."</span>
                    }.into_view(),
                    _ => view! {
                        <span class="whitespace-pre-wrap">{entry.text}</span>
                    }.into_view(),
                }}
            </div>
        </div>
    }
}

/// Run highlight.js over every code block under `root`
fn highlight_code_blocks(root: &web_sys::Element) {
    let Ok(blocks) = root.query_selector_all("pre code") else {
        return;
    };

    for i in 0..blocks.length() {
        if let Some(block) = blocks
            .item(i)
            .and_then(|node| node.dyn_into::<web_sys::Element>().ok())
        {
            let _ = hljs_highlight_element(&block);
        }
    }
}

/// Render assistant markdown to HTML. Fenced code blocks come out with
/// `language-*` classes for the highlighter to pick up.
fn render_markdown(markdown: &str) -> String {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);

    // Safety: drop inline/block raw HTML from model output before rendering.
    let parser = Parser::new_ext(markdown, options).filter_map(|event| match event {
        Event::Html(_) | Event::InlineHtml(_) => None,
        other => Some(other),
    });

    let mut out = String::new();
    pulldown_cmark::html::push_html(&mut out, parser);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_renders_emphasis() {
        let out = render_markdown("This is **important**.");
        assert!(out.contains("<strong>important</strong>"));
    }

    #[test]
    fn test_markdown_code_block_keeps_language_class() {
        let out = render_markdown("```rust\nfn main() {}\n```");
        assert!(out.contains("<pre><code class=\"language-rust\">"));
    }

    #[test]
    fn test_markdown_drops_raw_html() {
        let out = render_markdown("hello <script>alert(1)</script> world");
        assert!(!out.contains("<script>"));
        assert!(out.contains("hello"));
    }
}
