use axum::{
    routing::{get, post},
    Router,
};

use crate::server::{
    controller::{
        auth::{get_user, login, logout},
        event::{filter_events, get_group_events, get_group_key_events},
        group::{
            create_group, delete_group, filter_groups, get_all_groups, get_group, get_my_groups,
            get_my_location_groups, update_group,
        },
        reference::{get_english_levels, get_event_types, get_experts, get_locations, get_statuses},
        student::{
            add_group_students, delete_student, get_all_students, get_group_students, get_student,
            get_student_forms, get_student_to_edit, save_student_form, update_student,
            update_students,
        },
    },
    state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(login))
        .route("/api/auth/logout", get(logout))
        .route("/api/auth/user", get(get_user))
        .route("/api/groups", get(get_all_groups).post(create_group))
        .route("/api/groups/my", get(get_my_groups))
        .route("/api/groups/mylocation", get(get_my_location_groups))
        .route("/api/groups/filter", post(filter_groups))
        .route(
            "/api/groups/{id}",
            get(get_group).put(update_group).delete(delete_group),
        )
        .route(
            "/api/groups/{id}/students",
            get(get_group_students).post(add_group_students),
        )
        .route("/api/groups/{id}/events", get(get_group_events))
        .route("/api/groups/{id}/events/key", get(get_group_key_events))
        .route("/api/events/filter", post(filter_events))
        .route("/api/students", get(get_all_students).put(update_students))
        .route(
            "/api/students/forms",
            get(get_student_forms).post(save_student_form),
        )
        .route(
            "/api/students/{id}",
            get(get_student).put(update_student).delete(delete_student),
        )
        .route("/api/students/{id}/edit", get(get_student_to_edit))
        .route("/api/locations", get(get_locations))
        .route("/api/statuses", get(get_statuses))
        .route("/api/english-levels", get(get_english_levels))
        .route("/api/experts", get(get_experts))
        .route("/api/event-types", get(get_event_types))
}
