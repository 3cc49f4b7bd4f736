use crate::models::{ChannelReport, ChartPoint, TopicSummary};
use crate::utils::{bar_percent, format_iso8601_datetime, format_number};
use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct ChannelFormProps {
    pub channel_id: String,
    pub loading: bool,
    pub on_submit: Callback<String>,
}

#[function_component(ChannelForm)]
pub fn channel_form(props: &ChannelFormProps) -> Html {
    let current_input = use_state(|| props.channel_id.clone());

    // Follow the routed channel id on back/forward navigation
    {
        let current_input = current_input.clone();
        use_effect_with(props.channel_id.clone(), move |channel_id| {
            current_input.set(channel_id.clone());
            || ()
        });
    }

    let on_input = {
        let current_input = current_input.clone();
        Callback::from(move |e: InputEvent| {
            current_input.set(e.target_unchecked_into::<HtmlInputElement>().value());
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        let current_input = current_input.clone();
        Callback::from(move |e: web_sys::SubmitEvent| {
            e.prevent_default();
            on_submit.emit(current_input.trim().to_string());
        })
    };

    html! {
        <form onsubmit={on_submit} class="flex mb-6">
            <input
                type="text"
                class="flex-grow p-3 border border-gray-300 rounded-l focus:outline-none focus:ring-2 focus:ring-blue-500"
                placeholder="📺 Channel ID (not the URL!)"
                value={(*current_input).clone()}
                oninput={on_input}
                disabled={props.loading}
            />
            <button
                type="submit"
                disabled={props.loading}
                class="bg-blue-600 text-white px-6 rounded-r hover:bg-blue-700 disabled:opacity-50"
            >
                {"Analyze"}
            </button>
        </form>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorMessageProps {
    pub error_message: Option<String>,
}

#[function_component(ErrorMessage)]
pub fn error_message(props: &ErrorMessageProps) -> Html {
    if let Some(msg) = &props.error_message {
        html! {
            <div class="bg-red-100 border border-red-400 text-red-700 px-4 py-3 rounded mb-4">
                { format!("❌ Error: {msg}") }
            </div>
        }
    } else {
        html! {}
    }
}

#[function_component(InfoPrompt)]
pub fn info_prompt() -> Html {
    html! {
        <div class="bg-blue-100 border border-blue-300 text-blue-800 px-4 py-3 rounded mb-4">
            {"Enter a channel ID to get started."}
        </div>
    }
}

#[function_component(LoadingSpinner)]
pub fn loading_spinner() -> Html {
    html! {
        <div class="flex items-center justify-center py-8 text-gray-600">
            <div class="animate-spin h-6 w-6 mr-3 border-4 border-blue-500 border-t-transparent rounded-full"></div>
            {"🔍 Collecting data..."}
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ReportViewProps {
    pub report: ChannelReport,
}

#[function_component(ReportView)]
pub fn report_view(props: &ReportViewProps) -> Html {
    let report = &props.report;

    html! {
        <div>
            <div class="bg-green-100 border border-green-400 text-green-700 px-4 py-3 rounded mb-4">
                { format!("✅ Data collected on {}", format_iso8601_datetime(&report.generated_at)) }
            </div>

            <div class="grid grid-cols-1 md:grid-cols-3 gap-4 mb-6">
                <div class="bg-blue-100 p-4 rounded-lg">
                    <h3 class="text-lg font-semibold text-blue-800">{"Videos analyzed"}</h3>
                    <p class="text-2xl font-bold text-blue-600">{report.total_videos}</p>
                </div>
                <div class="bg-green-100 p-4 rounded-lg">
                    <h3 class="text-lg font-semibold text-green-800">{"Mean views"}</h3>
                    <p class="text-2xl font-bold text-green-600">{format_number(report.mean_views)}</p>
                </div>
                <div class="bg-purple-100 p-4 rounded-lg">
                    <h3 class="text-lg font-semibold text-purple-800">{"Median views"}</h3>
                    <p class="text-2xl font-bold text-purple-600">{format_number(report.median_views)}</p>
                </div>
            </div>

            <h2 class="text-xl font-semibold text-gray-800 mb-2">{"📋 Statistics per topic"}</h2>
            <TopicTable topics={report.topics.clone()} />

            <h2 class="text-xl font-semibold text-gray-800 mt-6 mb-2">{"📈 Videos per topic"}</h2>
            <TopicChart points={report.chart.clone()} />
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopicTableProps {
    pub topics: Vec<TopicSummary>,
}

#[function_component(TopicTable)]
pub fn topic_table(props: &TopicTableProps) -> Html {
    let header = |label: &str| {
        html! {
            <th class="px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider">{label.to_string()}</th>
        }
    };

    html! {
        <div class="overflow-x-auto">
            <table class="min-w-full bg-white border border-gray-300">
                <thead class="bg-gray-50">
                    <tr>
                        { header("Topic") }
                        { header("Videos") }
                        { header("Mean views") }
                        { header("Success rate") }
                        { header("Representative video") }
                    </tr>
                </thead>
                <tbody>
                    { for props.topics.iter().map(|row| html! {
                        <tr class="border-t border-gray-200">
                            <td class="px-4 py-2 font-semibold">{&row.topic}</td>
                            <td class="px-4 py-2">{row.video_count}</td>
                            <td class="px-4 py-2">{format_number(row.mean_views)}</td>
                            <td class="px-4 py-2">{&row.success_rate}</td>
                            <td class="px-4 py-2">{&row.representative_title}</td>
                        </tr>
                    }) }
                </tbody>
            </table>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct TopicChartProps {
    pub points: Vec<ChartPoint>,
}

#[function_component(TopicChart)]
pub fn topic_chart(props: &TopicChartProps) -> Html {
    let max = props.points.iter().map(|p| p.video_count).max().unwrap_or(0);

    html! {
        <div class="space-y-2">
            { for props.points.iter().map(|point| html! {
                <div class="flex items-center">
                    <span class="w-32 text-sm text-gray-700">{&point.topic}</span>
                    <div class="flex-grow bg-gray-100 rounded h-6">
                        <div
                            class="bg-blue-500 h-6 rounded"
                            style={format!("width: {}%", bar_percent(point.video_count, max))}
                        ></div>
                    </div>
                    <span class="w-12 text-right text-sm text-gray-700">{point.video_count}</span>
                </div>
            }) }
        </div>
    }
}
