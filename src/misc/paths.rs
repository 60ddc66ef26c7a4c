use urlencoding::encode;

pub const ACTIVITIES_PATH: &str = "/activities";

/// `/activities/{activity}/{action}?email={email}` with both values encoded.
pub fn participant_path(activity: &str, action: &str, email: &str) -> String {
    format!(
        "{ACTIVITIES_PATH}/{}/{action}?email={}",
        encode(activity),
        encode(email)
    )
}

pub fn join_base(base: &str, path: &str) -> String {
    format!("{}{path}", base.trim_end_matches('/'))
}
