#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;
    use tempus::db::clients::{Client, Clients};
    use tempus::db::users::{User, Users};
    use tempus::libs::error::AppError;
    use test_context::{test_context, TestContext};

    struct ClientTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for ClientTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tempus.db");
            ClientTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    fn seed_user(ctx: &ClientTestContext, email: &str) -> i64 {
        Users::open(&ctx.db_path).unwrap().create(&User::new("Dev".to_string(), email.to_string())).unwrap()
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_crud(ctx: &mut ClientTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let mut clients = Clients::open(&ctx.db_path).unwrap();

        let id = clients.create(&Client::new(user_id, "Acme".to_string(), Some("ops@acme.com".to_string()))).unwrap();
        let fetched = clients.get_by_id(user_id, id).unwrap().unwrap();
        assert_eq!(fetched.name, "Acme");
        assert_eq!(fetched.email, Some("ops@acme.com".to_string()));

        clients.update(user_id, id, "Acme Corp", Some("billing@acme.com")).unwrap();
        let updated = clients.get_by_id(user_id, id).unwrap().unwrap();
        assert_eq!(updated.name, "Acme Corp");
        assert_eq!(updated.email, Some("billing@acme.com".to_string()));

        clients.delete(user_id, id).unwrap();
        assert!(clients.get_by_id(user_id, id).unwrap().is_none());
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_client_search_matches_name_and_email(ctx: &mut ClientTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let mut clients = Clients::open(&ctx.db_path).unwrap();
        clients.create(&Client::new(user_id, "Acme".to_string(), Some("ops@acme.com".to_string()))).unwrap();
        clients.create(&Client::new(user_id, "Globex".to_string(), Some("info@globex.io".to_string()))).unwrap();

        let by_name = clients.list(user_id, Some("Glob")).unwrap();
        assert_eq!(by_name.len(), 1);
        assert_eq!(by_name[0].name, "Globex");

        let by_email = clients.list(user_id, Some("acme.com")).unwrap();
        assert_eq!(by_email.len(), 1);
        assert_eq!(by_email[0].name, "Acme");

        assert_eq!(clients.list(user_id, None).unwrap().len(), 2);
    }

    #[test_context(ClientTestContext)]
    #[test]
    fn test_clients_are_scoped_per_user(ctx: &mut ClientTestContext) {
        let owner = seed_user(ctx, "owner@example.com");
        let intruder = seed_user(ctx, "intruder@example.com");
        let mut clients = Clients::open(&ctx.db_path).unwrap();
        let id = clients.create(&Client::new(owner, "Acme".to_string(), None)).unwrap();

        assert!(clients.get_by_id(intruder, id).unwrap().is_none());
        assert!(clients.list(intruder, None).unwrap().is_empty());

        let err = clients.update(intruder, id, "Stolen", None).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
        let err = clients.delete(intruder, id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));

        // The record is untouched for its owner.
        assert_eq!(clients.get_by_id(owner, id).unwrap().unwrap().name, "Acme");
    }
}
