// Diesel table definitions for the lifeplan database.

diesel::table! {
    local_state (key) {
        key -> Text,
        value -> Text,
    }
}

diesel::table! {
    cloud_state (id) {
        id -> Text,
        state -> Text,
        updated_at -> Nullable<Text>,
    }
}

diesel::table! {
    ideas (id) {
        id -> Text,
        text -> Text,
        category -> Text,
        linked_brand -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    brands_pipeline (id) {
        id -> Text,
        name -> Text,
        description -> Text,
        category -> Text,
        planned_start_date -> Text,
        source_idea -> Text,
        sort_order -> Integer,
        created_at -> Text,
    }
}

diesel::table! {
    brands_current (id) {
        id -> Text,
        data -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    brands_live (id) {
        id -> Text,
        name -> Text,
        start_date -> Text,
        revenue_log -> Text,
        status -> Text,
        phase -> Nullable<Integer>,
        source -> Nullable<Text>,
        created_at -> Text,
    }
}

diesel::table! {
    brands_archive (id) {
        id -> Text,
        name -> Text,
        reason -> Text,
        closed_date -> Text,
        total_revenue -> Text,
        summary -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    work_schedule (id) {
        id -> Text,
        title -> Text,
        description -> Text,
        date -> Text,
        time -> Text,
        priority -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    meetings_schedule (id) {
        id -> Text,
        title -> Text,
        with_whom -> Text,
        date -> Text,
        time -> Text,
        notes -> Text,
        created_at -> Text,
    }
}

diesel::table! {
    connections (date) {
        date -> Text,
        count -> BigInt,
        updated_at -> Nullable<Text>,
    }
}

diesel::table! {
    planning_monthly (month_key) {
        month_key -> Text,
        goals -> Text,
        notes -> Text,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    planning_weekly (week_key) {
        week_key -> Text,
        goals -> Text,
        tasks -> Text,
        notes -> Text,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    planning_daily (date) {
        date -> Text,
        goals -> Text,
        notes -> Text,
        created_at -> Nullable<Text>,
    }
}

diesel::table! {
    timetable_logs (date, task_id) {
        date -> Text,
        task_id -> Text,
        status -> Text,
        zone -> Text,
        updated_at -> Text,
    }
}

diesel::table! {
    protocol_logs (date, item_id) {
        date -> Text,
        item_id -> Text,
        status -> Text,
        zone -> Text,
        auto -> Bool,
        updated_at -> Text,
    }
}

diesel::table! {
    settings_app (id) {
        id -> Text,
        data -> Text,
        updated_at -> Text,
    }
}

diesel::allow_tables_to_appear_in_same_query!(
    local_state,
    cloud_state,
    ideas,
    brands_pipeline,
    brands_current,
    brands_live,
    brands_archive,
    work_schedule,
    meetings_schedule,
    connections,
    planning_monthly,
    planning_weekly,
    planning_daily,
    timetable_logs,
    protocol_logs,
    settings_app,
);
