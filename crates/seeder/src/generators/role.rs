//! Role assignment generation.

/// A `(user_id, role_id)` row for the `user_roles` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeneratedUserRole {
    pub user_id: i32,
    pub role_id: i32,
}

/// Pairs every user ID in `start_user_id..=end_user_id` with `role_id`, in
/// ascending order. An inverted range yields no rows.
///
/// The user IDs are not checked against `users`.
pub fn role_assignments(
    start_user_id: i32,
    end_user_id: i32,
    role_id: i32,
) -> Vec<GeneratedUserRole> {
    (start_user_id..=end_user_id)
        .map(|user_id| GeneratedUserRole { user_id, role_id })
        .collect()
}
