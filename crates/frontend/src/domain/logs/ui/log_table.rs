use contracts::domain::log_record::LogRecord;
use leptos::prelude::*;

/// Reformat the backend's `dd-Mon-yyyy` date for display as `M/D/YYYY`.
/// Values that do not parse are shown as received.
fn format_date(raw: &str) -> String {
    chrono::NaiveDate::parse_from_str(raw, "%d-%b-%Y")
        .map(|d| d.format("%-m/%-d/%Y").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

/// Populated table of saved records, with a manual reload control in the
/// header row. `id` is the row key and is unique within the collection.
#[component]
pub fn LogTable(logs: Vec<LogRecord>, on_reload: Callback<()>) -> impl IntoView {
    view! {
        <div class="log-table">
            <div class="log-table__header">
                <h2 class="log-table__title">"Log Records"</h2>
                <button
                    class="button button--secondary"
                    title="Reload the Dashboard"
                    on:click=move |_| on_reload.run(())
                >
                    "⟳"
                </button>
            </div>

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Log ID"</th>
                            <th class="table__header-cell">"Date"</th>
                            <th class="table__header-cell">"Hour"</th>
                            <th class="table__header-cell">"Software Name"</th>
                            <th class="table__header-cell">"Version"</th>
                            <th class="table__header-cell">"Title"</th>
                            <th class="table__header-cell">"IP Address"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"ID"</th>
                            <th class="table__header-cell">"Origin File"</th>
                        </tr>
                    </thead>
                    <tbody>
                        {logs
                            .into_iter()
                            .map(|row| {
                                view! {
                                    <tr class="table__row">
                                        <td class="table__cell">{row.log_id}</td>
                                        <td class="table__cell">{format_date(&row.date)}</td>
                                        <td class="table__cell">{row.hour}</td>
                                        <td class="table__cell">{row.software_name}</td>
                                        <td class="table__cell">{row.version}</td>
                                        <td class="table__cell">{row.title}</td>
                                        <td class="table__cell">{row.ip_address}</td>
                                        <td class="table__cell">{row.description}</td>
                                        <td class="table__cell">{row.id}</td>
                                        <td class="table__cell">{row.origin_file}</td>
                                    </tr>
                                }
                            })
                            .collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_backend_date_for_display() {
        assert_eq!(format_date("01-Apr-2022"), "4/1/2022");
        assert_eq!(format_date("25-Dec-2023"), "12/25/2023");
    }

    #[test]
    fn passes_unparseable_dates_through() {
        assert_eq!(format_date("not-a-date"), "not-a-date");
        assert_eq!(format_date(""), "");
    }
}
