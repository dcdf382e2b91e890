//! Tickets Page
//!
//! Ticket list with create/delete/reply operations and the status dashboard.
//! Every mutation is a server round trip followed by a full reload; the list
//! is always a fresh snapshot, never patched in place.

use leptos::*;

use crate::api;
use crate::components::{ListSkeleton, StatusChart};
use crate::dialog;
use crate::state::global::{Complaint, GlobalState};

/// Fetch the dashboard counters and the ticket list, replacing both signals
/// wholesale.
async fn reload(state: GlobalState) {
    // Counters feed the dashboard; a failure here only costs the chart
    match api::fetch_stats().await {
        Ok(stats) => state.stats.set(stats),
        Err(e) => {
            web_sys::console::error_1(&format!("Failed to fetch stats: {}", e).into());
        }
    }

    match api::fetch_complaints().await {
        Ok(list) => state.complaints.set(list),
        Err(e) => state.show_error(&e),
    }
}

/// Tickets page component
#[component]
pub fn Tickets() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // Load the snapshot on mount
    let state_for_effect = state.clone();
    create_effect(move |_| {
        let state = state_for_effect.clone();
        spawn_local(async move {
            state.loading.set(true);
            reload(state.clone()).await;
            state.loading.set(false);
        });
    });

    view! {
        <div class="space-y-8">
            // Page header
            <div>
                <h1 class="text-3xl font-bold">"Tickets"</h1>
                <p class="text-gray-400 mt-1">"Submit and track customer complaints"</p>
            </div>

            // Dashboard
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"Overview"</h2>
                <div class="grid md:grid-cols-2 gap-8 items-center">
                    <div class="grid grid-cols-3 gap-4">
                        <StatCard
                            label="Total"
                            value=Signal::derive({
                                let state = state.clone();
                                move || state.stats.get().total
                            })
                        />
                        <StatCard
                            label="Pending"
                            value=Signal::derive({
                                let state = state.clone();
                                move || state.stats.get().pending
                            })
                        />
                        <StatCard
                            label="Resolved"
                            value=Signal::derive({
                                let state = state.clone();
                                move || state.stats.get().resolved
                            })
                        />
                    </div>

                    <StatusChart />
                </div>
            </section>

            // New ticket form
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"New Ticket"</h2>
                <TicketForm />
            </section>

            // Ticket list
            <section class="bg-gray-800 rounded-xl p-6">
                <h2 class="text-xl font-semibold mb-4">"All Tickets"</h2>

                {move || {
                    if state.loading.get() {
                        view! { <ListSkeleton count=3 /> }.into_view()
                    } else {
                        view! { <TicketList /> }.into_view()
                    }
                }}
            </section>
        </div>
    }
}

/// Single dashboard counter
#[component]
fn StatCard(
    label: &'static str,
    #[prop(into)]
    value: Signal<u32>,
) -> impl IntoView {
    view! {
        <div class="bg-gray-700 rounded-lg p-4 text-center">
            <div class="text-3xl font-bold">{move || value.get()}</div>
            <div class="text-gray-400 text-sm mt-1">{label}</div>
        </div>
    }
}

/// Ticket submission form
#[component]
fn TicketForm() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let (content, set_content) = create_signal(String::new());
    let (submitting, set_submitting) = create_signal(false);

    let on_submit = move |_| {
        let text = content.get().trim().to_string();
        if text.is_empty() {
            dialog::alert("Please describe your complaint first");
            return;
        }

        set_submitting.set(true);

        let state_clone = state.clone();
        spawn_local(async move {
            match api::create_complaint(&text).await {
                Ok(()) => {
                    set_content.set(String::new());
                    state_clone.show_success("Ticket submitted");
                    reload(state_clone.clone()).await;
                }
                Err(e) => {
                    state_clone.show_error(&e);
                }
            }
            set_submitting.set(false);
        });
    };

    view! {
        <div class="space-y-4">
            <textarea
                placeholder="What went wrong?"
                prop:value=move || content.get()
                on:input=move |ev| set_content.set(event_target_value(&ev))
                rows="3"
                class="w-full bg-gray-700 rounded-lg px-4 py-3
                       border border-gray-600 focus:border-primary-500 focus:outline-none
                       resize-none"
            />

            <button
                on:click=on_submit
                disabled=move || submitting.get()
                class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                       rounded-lg font-medium transition-colors"
            >
                {move || if submitting.get() { "Submitting..." } else { "Submit" }}
            </button>
        </div>
    }
}

/// Full ticket list, or a placeholder when empty
#[component]
fn TicketList() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="divide-y divide-gray-700">
            {move || {
                let complaints = state.complaints.get();

                if complaints.is_empty() {
                    view! {
                        <div class="text-center py-12 text-gray-400">"No records"</div>
                    }.into_view()
                } else {
                    complaints
                        .into_iter()
                        .map(|complaint| view! { <TicketRow complaint=complaint /> })
                        .collect_view()
                }
            }}
        </div>
    }
}

/// One ticket row with status badge, optional admin reply, and actions
#[component]
fn TicketRow(complaint: Complaint) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    let id = complaint.id;
    let resolved = complaint.status.is_resolved();

    let state_for_delete = state.clone();
    let on_delete = move |_| {
        if !dialog::confirm("Delete this ticket?") {
            return;
        }

        let state = state_for_delete.clone();
        spawn_local(async move {
            match api::delete_complaint(id).await {
                Ok(()) => state.show_success("Ticket deleted"),
                Err(e) => state.show_error(&e),
            }
            // The list is a server snapshot; reload regardless of outcome
            reload(state.clone()).await;
        });
    };

    let state_for_reply = state;
    let on_reply = move |_| {
        let Some(text) = dialog::prompt("Admin reply") else {
            return;
        };
        let reply = text.trim().to_string();
        if reply.is_empty() {
            return;
        }

        let state = state_for_reply.clone();
        spawn_local(async move {
            match api::reply_complaint(id, &reply).await {
                Ok(()) => state.show_success("Replied and resolved"),
                Err(e) => state.show_error(&e),
            }
            reload(state.clone()).await;
        });
    };

    view! {
        <div class="py-4">
            <div class="flex items-center justify-between mb-2">
                <span class="text-sm text-gray-400">{complaint.timestamp.clone()}</span>
                {if resolved {
                    view! {
                        <span class="px-3 py-1 rounded-full text-xs font-medium bg-green-600 text-white">
                            "Resolved"
                        </span>
                    }
                } else {
                    view! {
                        <span class="px-3 py-1 rounded-full text-xs font-medium bg-yellow-500 text-gray-900">
                            "Pending"
                        </span>
                    }
                }}
            </div>

            <p class="font-semibold whitespace-pre-wrap">{complaint.content.clone()}</p>

            {complaint.admin_reply.clone().map(|reply| view! {
                <div class="mt-3 p-3 bg-gray-700 border-l-4 border-green-500 rounded text-sm">
                    <span class="font-semibold">"Support: "</span>
                    {reply}
                </div>
            })}

            <div class="mt-3 flex justify-end space-x-2">
                {(!resolved).then(|| view! {
                    <button
                        on:click=on_reply
                        class="px-4 py-1 rounded-full text-sm border border-primary-500
                               text-primary-400 hover:bg-primary-600 hover:text-white transition-colors"
                    >
                        "Reply"
                    </button>
                })}

                <button
                    on:click=on_delete
                    class="px-4 py-1 rounded-full text-sm border border-red-500
                           text-red-400 hover:bg-red-600 hover:text-white transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </div>
    }
}
