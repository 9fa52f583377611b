//! Liveness endpoint.
//! Used by: server.

pub const ONLINE_MESSAGE: &str = "compose-updater online";

pub async fn online() -> &'static str {
    ONLINE_MESSAGE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn returns_fixed_message() {
        assert_eq!(online().await, "compose-updater online");
    }
}
