//! Reducer for the catalog table.

use crate::ui::mvi::Reducer;

use super::intent::TableIntent;
use super::state::{DetailState, TablePhase, TableState};

pub struct TableReducer;

impl Reducer for TableReducer {
    type State = TableState;
    type Intent = TableIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        let TableState { page_size, phase } = state;
        let phase = reduce_phase(phase, intent, page_size);
        TableState { page_size, phase }
    }
}

fn reduce_phase(phase: TablePhase, intent: TableIntent, page_size: usize) -> TablePhase {
    match intent {
        TableIntent::ListRequested { request } => {
            let animation_tick = match phase {
                TablePhase::Loading { animation_tick, .. } => animation_tick,
                TablePhase::Ready { .. } => 0,
            };
            TablePhase::Loading {
                request: Some(request),
                animation_tick,
            }
        }

        TableIntent::ListLoaded { request, rows } => match phase {
            TablePhase::Loading {
                request: Some(pending),
                ..
            } if pending == request => TablePhase::Ready {
                rows,
                cursor: 0,
                detail: DetailState::Idle,
            },
            other => other,
        },

        // No retry and no error screen: the spinner keeps going.
        TableIntent::ListFailed { .. } => phase,

        TableIntent::MoveCursor(delta) => with_cursor(phase, |cursor, len| {
            let last = len.saturating_sub(1) as isize;
            (cursor as isize).saturating_add(delta).clamp(0, last) as usize
        }),

        TableIntent::SelectRow(index) => {
            with_cursor(phase, |cursor, len| if index < len { index } else { cursor })
        }

        TableIntent::NextPage => with_cursor(phase, |cursor, len| {
            let last_page = last_page(len, page_size);
            ((cursor / page_size + 1).min(last_page) * page_size).min(len.saturating_sub(1))
        }),

        TableIntent::PrevPage => with_cursor(phase, |cursor, _| {
            (cursor / page_size).saturating_sub(1) * page_size
        }),

        TableIntent::FirstPage => with_cursor(phase, |_, _| 0),

        TableIntent::LastPage => with_cursor(phase, |_, len| {
            (last_page(len, page_size) * page_size).min(len.saturating_sub(1))
        }),

        TableIntent::DetailRequested { id, request } => match phase {
            TablePhase::Ready { rows, cursor, .. } => TablePhase::Ready {
                rows,
                cursor,
                detail: DetailState::Fetching {
                    id,
                    request,
                    animation_tick: 0,
                },
            },
            loading => loading,
        },

        TableIntent::DetailLoaded { request, detail } => {
            with_detail(phase, |current| match current {
                DetailState::Fetching { request: pending, .. } if pending == request => {
                    DetailState::Open(detail)
                }
                other => other,
            })
        }

        TableIntent::DetailFailed { request } => with_detail(phase, |current| match current {
            DetailState::Fetching { request: pending, .. } if pending == request => {
                DetailState::Idle
            }
            other => other,
        }),

        TableIntent::CloseDetail => with_detail(phase, |current| match current {
            DetailState::Open(_) => DetailState::Idle,
            other => other,
        }),

        TableIntent::AnimationTick => match phase {
            TablePhase::Loading {
                request,
                animation_tick,
            } => TablePhase::Loading {
                request,
                animation_tick: animation_tick.wrapping_add(1),
            },
            ready => with_detail(ready, |current| match current {
                DetailState::Fetching {
                    id,
                    request,
                    animation_tick,
                } => DetailState::Fetching {
                    id,
                    request,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            }),
        },
    }
}

fn last_page(len: usize, page_size: usize) -> usize {
    len.div_ceil(page_size).saturating_sub(1)
}

/// Apply `f(cursor, len)` in the ready phase; loading is left untouched.
fn with_cursor(phase: TablePhase, f: impl FnOnce(usize, usize) -> usize) -> TablePhase {
    match phase {
        TablePhase::Ready {
            rows,
            cursor,
            detail,
        } => {
            let cursor = if rows.is_empty() {
                0
            } else {
                f(cursor, rows.len())
            };
            TablePhase::Ready {
                rows,
                cursor,
                detail,
            }
        }
        loading => loading,
    }
}

fn with_detail(phase: TablePhase, f: impl FnOnce(DetailState) -> DetailState) -> TablePhase {
    match phase {
        TablePhase::Ready {
            rows,
            cursor,
            detail,
        } => TablePhase::Ready {
            rows,
            cursor,
            detail: f(detail),
        },
        loading => loading,
    }
}
