//! Weather Widget Component

use croptrace::catalog::weather;
use leptos::*;

#[component]
pub fn WeatherWidget() -> impl IntoView {
    let now = weather::current();

    view! {
        <div class="mt-6 p-4 rounded-xl bg-gradient-to-br from-sky-50 to-emerald-50 dark:from-gray-800 dark:to-gray-700 border border-sky-100 dark:border-gray-700">
            <div class="flex items-center justify-between">
                <div>
                    <p class="text-xs text-sky-700/80 dark:text-sky-300/80">{now.location}</p>
                    <p class="text-3xl font-bold text-sky-900 dark:text-sky-100">
                        {format!("{}°C", now.temperature_c)}
                    </p>
                    <p class="text-sm text-sky-800 dark:text-sky-200">{now.condition.label()}</p>
                </div>
                <span class="text-4xl">{now.condition.icon()}</span>
            </div>

            <div class="flex justify-between mt-3 text-xs text-sky-700 dark:text-sky-300">
                <span>{format!("💧 {}%", now.humidity)}</span>
                <span>{format!("🌬️ {} km/h", now.wind_kph)}</span>
            </div>

            <div class="grid grid-cols-4 gap-1 mt-3 pt-3 border-t border-sky-100 dark:border-gray-600">
                {weather::forecast().iter().map(|day| view! {
                    <div class="text-center">
                        <p class="text-xs text-sky-700/80 dark:text-sky-300/80">{day.day}</p>
                        <p class="text-lg">{day.condition.icon()}</p>
                        <p class="text-xs text-sky-900 dark:text-sky-100">
                            {format!("{}°/{}°", day.high_c, day.low_c)}
                        </p>
                    </div>
                }).collect_view()}
            </div>

            <p class="mt-3 text-xs text-emerald-700 dark:text-emerald-300/80">{now.advice()}</p>
        </div>
    }
}
