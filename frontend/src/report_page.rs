use crate::api::fetch_report;
use crate::components::{ChannelForm, ErrorMessage, InfoPrompt, LoadingSpinner, ReportView};
use crate::env_variable_utils::get_app_name;
use crate::models::ChannelReport;
use crate::router::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ReportPageProps {
    #[prop_or_default]
    pub channel_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SubmitAction {
    Navigate(Route),
    /// Same channel as the current route: run the report again in place.
    Rerun,
}

pub fn submit_action(current: Option<&str>, submitted: &str) -> SubmitAction {
    if submitted.is_empty() {
        SubmitAction::Navigate(Route::Home)
    } else if current == Some(submitted) {
        SubmitAction::Rerun
    } else {
        SubmitAction::Navigate(Route::Channel {
            id: submitted.to_string(),
        })
    }
}

#[function_component(ReportPage)]
pub fn report_page(props: &ReportPageProps) -> Html {
    let report = use_state(|| None::<ChannelReport>);
    let error_message = use_state(|| None::<String>);
    let loading = use_state(|| false);
    let runs = use_state(|| 0u32);
    let navigator = use_navigator();

    // Runs a report whenever the routed channel id changes or a rerun is requested
    {
        let report = report.clone();
        let error_message = error_message.clone();
        let loading = loading.clone();

        use_effect_with((props.channel_id.clone(), *runs), move |(channel_id, _)| {
            report.set(None);
            error_message.set(None);
            if let Some(channel_id) = channel_id.clone() {
                loading.set(true);
                wasm_bindgen_futures::spawn_local(async move {
                    fetch_report(channel_id, report, error_message, loading).await;
                });
            }
            || ()
        });
    }

    let on_submit = {
        let current = props.channel_id.clone();
        let runs = runs.clone();
        Callback::from(move |channel_id: String| {
            match submit_action(current.as_deref(), &channel_id) {
                SubmitAction::Rerun => runs.set(*runs + 1),
                SubmitAction::Navigate(route) => {
                    if let Some(navigator) = &navigator {
                        navigator.push(&route);
                    }
                }
            }
        })
    };

    let body = if *loading {
        html! { <LoadingSpinner /> }
    } else if let Some(channel_report) = &*report {
        html! { <ReportView report={channel_report.clone()} /> }
    } else if props.channel_id.is_none() {
        html! { <InfoPrompt /> }
    } else {
        html! {}
    };

    html! {
        <div class="min-h-screen bg-gray-700 p-4">
            <div class="max-w-5xl mx-auto">
                <div class="bg-white rounded-lg shadow-lg p-8">
                    <h1 class="text-3xl font-bold text-gray-800 mb-2">{format!("📊 {}", get_app_name())}</h1>
                    <p class="text-gray-600 mb-6">
                        {"Topic statistics for the latest uploads (up to 100 videos) of a YouTube channel."}
                    </p>
                    <ChannelForm
                        channel_id={props.channel_id.clone().unwrap_or_default()}
                        loading={*loading}
                        on_submit={on_submit}
                    />
                    <ErrorMessage error_message={(*error_message).clone()} />
                    { body }
                </div>
            </div>
        </div>
    }
}
