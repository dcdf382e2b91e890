//! Analysis Page
//!
//! Sentiment analysis of free-form complaint text. The delimited response is
//! parsed once into an `AnalysisReport` and rendered field by field.

use leptos::*;

use crate::api;
use crate::api::AnalysisReport;
use crate::components::loading::InlineLoading;
use crate::dialog;

/// Analysis page component
#[component]
pub fn Analyze() -> impl IntoView {
    let (text, set_text) = create_signal(String::new());
    let (busy, set_busy) = create_signal(false);
    let (report, set_report) = create_signal(None::<AnalysisReport>);

    let on_click = move |_| {
        let input = text.get().trim().to_string();
        if input.is_empty() {
            dialog::alert("Please enter some text to analyze");
            return;
        }

        set_busy.set(true);
        set_report.set(None);

        spawn_local(async move {
            match api::analyze_text(&input).await {
                Ok(result) => set_report.set(Some(result)),
                Err(e) => dialog::alert(&e),
            }
            // Always restored, whatever the outcome
            set_busy.set(false);
        });
    };

    view! {
        <div class="max-w-3xl mx-auto space-y-8">
            // Header
            <div>
                <h1 class="text-3xl font-bold">"Sentiment Analysis"</h1>
                <p class="text-gray-400 mt-1">"Paste complaint text to get a structured read on it"</p>
            </div>

            // Input section
            <section class="bg-gray-800 rounded-xl p-6 space-y-4">
                <textarea
                    placeholder="Paste the complaint here..."
                    prop:value=move || text.get()
                    on:input=move |ev| set_text.set(event_target_value(&ev))
                    rows="5"
                    class="w-full bg-gray-700 rounded-lg px-4 py-3
                           border border-gray-600 focus:border-primary-500 focus:outline-none
                           resize-none"
                />

                <button
                    on:click=on_click
                    disabled=move || busy.get()
                    class="px-6 py-2 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                           rounded-lg font-medium transition-colors flex items-center space-x-2"
                >
                    {move || if busy.get() {
                        view! {
                            <InlineLoading />
                            <span>"Analyzing..."</span>
                        }.into_view()
                    } else {
                        view! {
                            <span>"Analyze"</span>
                        }.into_view()
                    }}
                </button>
            </section>

            // Result
            {move || {
                report.get().map(|report| view! { <ReportView report=report /> })
            }}
        </div>
    }
}

/// Structured report, fields in wire order; falls back to the raw text when
/// the response carried none of the expected labels.
#[component]
fn ReportView(report: AnalysisReport) -> impl IntoView {
    if !report.is_structured() {
        return view! {
            <section class="bg-gray-800 rounded-xl p-6">
                <p class="text-gray-200 whitespace-pre-wrap">{report.raw}</p>
            </section>
        }.into_view();
    }

    view! {
        <section class="bg-gray-800 rounded-xl p-6 space-y-4">
            {report.score.map(|score| view! {
                <ReportField label="Sentiment score" accent="text-red-400" value=score />
            })}
            {report.label.map(|label| view! {
                <ReportField label="Sentiment" accent="text-blue-400" value=label />
            })}
            {report.requests.map(|requests| view! {
                <ReportField label="Key request" accent="text-gray-200" value=requests />
            })}
            {report.suggested_reply.map(|reply| view! {
                <div class="p-4 bg-gray-700 border-l-4 border-green-500 rounded">
                    <div class="font-semibold mb-1">"💡 Suggested reply"</div>
                    <p class="text-gray-200 whitespace-pre-wrap">{reply}</p>
                </div>
            })}
        </section>
    }.into_view()
}

#[component]
fn ReportField(
    label: &'static str,
    accent: &'static str,
    #[prop(into)]
    value: String,
) -> impl IntoView {
    view! {
        <div>
            <span class=format!("font-semibold {}", accent)>{label}": "</span>
            <span class="text-gray-200">{value}</span>
        </div>
    }
}
