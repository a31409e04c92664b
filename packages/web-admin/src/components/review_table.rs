//! Bulk-selection review table for vendor and company registrations

use dioxus::prelude::*;
use moderation::{
    CheckboxState, DispatchBlocked, ModerationRequest, ReviewableEntity, RowView, TableView,
};

use super::{Avatar, BulkActionBar, RejectDialog, RequestBanner, RowActionMenu, StatusBadge};
use crate::api::ServerGateway;
use crate::state::{use_review_table, ReviewContext};

#[derive(Props, Clone, PartialEq)]
pub struct ReviewTableProps {
    /// Rows currently displayed, in display order
    pub entities: Vec<ReviewableEntity>,
    /// Called after a moderation batch succeeds so the page can reload
    pub on_refresh: EventHandler<()>,
}

/// Review table with select-all, bulk approve/reject and a reason dialog
#[component]
pub fn ReviewTable(props: ReviewTableProps) -> Element {
    let mut table = use_review_table();
    let entities = props.entities.clone();
    let on_refresh = props.on_refresh;

    let view = TableView::build(table.kind(), &props.entities, &table.state.read());

    let handle_approve = {
        let entities = entities.clone();
        move |_: ()| {
            let request = table.state.write().begin_approve(&entities);
            dispatch(table, request, on_refresh);
        }
    };

    let handle_open_reject = move |_: ()| {
        if let Err(blocked) = table.state.write().open_rejection() {
            tracing::warn!(%blocked, "Reject dialog not opened");
        }
    };

    let handle_confirm_reject = {
        let entities = entities.clone();
        move |_: ()| {
            let request = table.state.write().begin_reject(&entities);
            dispatch(table, request, on_refresh);
        }
    };

    let handle_retry = {
        let entities = entities.clone();
        move |_: ()| {
            let request = table.state.write().retry(&entities);
            dispatch(table, request, on_refresh);
        }
    };

    let handle_toggle_all = {
        let entities = entities.clone();
        move |_: FormEvent| table.state.write().toggle_all(&entities)
    };

    let header_checked = view.header == CheckboxState::Checked;
    let header_mixed = match view.header {
        CheckboxState::Checked => "true",
        CheckboxState::Indeterminate => "mixed",
        CheckboxState::Unchecked => "false",
    };

    rsx! {
        RequestBanner { on_retry: handle_retry }

        div {
            class: "bg-white rounded-lg shadow-sm border border-gray-200 overflow-hidden",

            BulkActionBar {
                selected_label: view.selected_label.clone(),
                approve_enabled: view.approve_enabled,
                reject_enabled: view.reject_enabled,
                busy: view.rows_locked,
                on_approve: handle_approve,
                on_reject: handle_open_reject,
            }

            div {
                class: "overflow-x-auto",
                table {
                    class: "min-w-full divide-y divide-gray-200",
                    thead {
                        class: "bg-gray-50",
                        tr {
                            th {
                                class: "px-4 py-3 w-10",
                                input {
                                    r#type: "checkbox",
                                    class: if view.header == CheckboxState::Indeterminate {
                                        "rounded border-gray-300 opacity-60"
                                    } else {
                                        "rounded border-gray-300"
                                    },
                                    "aria-label": "Select all {view.title}",
                                    "aria-checked": header_mixed,
                                    checked: header_checked,
                                    disabled: view.select_all_inert,
                                    onchange: handle_toggle_all,
                                }
                            }
                            HeaderCell { label: "Name" }
                            HeaderCell { label: "Status" }
                            HeaderCell { label: view.location_label }
                            HeaderCell { label: "Tax IDs" }
                            HeaderCell { label: "Joined" }
                            th { class: "px-4 py-3" }
                        }
                    }
                    tbody {
                        class: "divide-y divide-gray-200",
                        if view.rows.is_empty() {
                            tr {
                                td {
                                    class: "px-4 py-12 text-center text-gray-500",
                                    colspan: "7",
                                    "No {view.kind.plural()} to show."
                                }
                            }
                        }
                        for row in view.rows.iter() {
                            ReviewRow {
                                key: "{row.id}",
                                row: row.clone(),
                                locked: view.rows_locked,
                            }
                        }
                    }
                }
            }
        }

        RejectDialog { on_confirm: handle_confirm_reject }
    }
}

#[component]
fn HeaderCell(label: &'static str) -> Element {
    rsx! {
        th {
            class: "px-4 py-3 text-left text-xs font-medium text-gray-500 uppercase tracking-wider",
            "{label}"
        }
    }
}

#[derive(Props, Clone, PartialEq)]
struct ReviewRowProps {
    row: RowView,
    locked: bool,
}

#[component]
fn ReviewRow(props: ReviewRowProps) -> Element {
    let mut table = use_review_table();
    let row = &props.row;
    let id = row.id.clone();

    rsx! {
        tr {
            class: if row.selected { "bg-amber-50" } else { "hover:bg-gray-50" },
            td {
                class: "px-4 py-3",
                input {
                    r#type: "checkbox",
                    class: "rounded border-gray-300",
                    "aria-label": "Select {row.name}",
                    checked: row.selected,
                    disabled: props.locked,
                    onchange: move |_| table.state.write().toggle_one(&id),
                }
            }
            td {
                class: "px-4 py-3",
                div {
                    class: "flex items-center gap-3",
                    Avatar { initials: row.initials.clone() }
                    div {
                        class: "min-w-0",
                        p { class: "text-sm font-medium text-gray-900 truncate", "{row.name}" }
                        p { class: "text-sm text-gray-500 truncate", "{row.email}" }
                    }
                }
            }
            td {
                class: "px-4 py-3",
                StatusBadge { badge: row.badge }
                if let Some(reason) = &row.rejection_reason {
                    p { class: "text-xs text-red-600 mt-1 line-clamp-2", "{reason}" }
                }
                if let Some(approver) = &row.approved_by {
                    p { class: "text-xs text-gray-500 mt-1", "by {approver}" }
                }
            }
            td { class: "px-4 py-3 text-sm text-gray-600", "{row.location}" }
            td {
                class: "px-4 py-3 text-xs text-gray-600 font-mono",
                if let Some(gst) = &row.gst_number {
                    p { "GST {gst}" }
                }
                if let Some(pan) = &row.pan_number {
                    p { "PAN {pan}" }
                }
            }
            td { class: "px-4 py-3 text-sm text-gray-500 whitespace-nowrap", "{row.joined}" }
            td {
                class: "px-4 py-3 text-right",
                RowActionMenu { name: row.name.clone() }
            }
        }
    }
}

/// Send a moderation request through the server and record its outcome.
fn dispatch(
    mut table: ReviewContext,
    request: Result<ModerationRequest, DispatchBlocked>,
    on_refresh: EventHandler<()>,
) {
    let request = match request {
        Ok(request) => request,
        Err(blocked) => {
            tracing::warn!(%blocked, "Moderation action not dispatched");
            return;
        }
    };

    spawn(async move {
        let outcome = request.execute(&ServerGateway).await;
        let succeeded = outcome.is_ok();
        table.state.write().complete(request.ticket, outcome);

        if succeeded {
            on_refresh.call(());
        }
    });
}
