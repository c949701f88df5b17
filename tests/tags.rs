#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use tempfile::TempDir;
    use tempus::db::tags::{Tag, Tags};
    use tempus::db::users::{User, Users};
    use tempus::libs::error::AppError;
    use tempus::libs::query::PageRequest;
    use test_context::{test_context, TestContext};

    struct TagTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for TagTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("tempus.db");
            TagTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    fn seed_user(ctx: &TagTestContext, email: &str) -> i64 {
        Users::open(&ctx.db_path).unwrap().create(&User::new("Dev".to_string(), email.to_string())).unwrap()
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_crud(ctx: &mut TagTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let mut tags = Tags::open(&ctx.db_path).unwrap();

        let id = tags.create(&Tag::new(user_id, "urgent".to_string(), Some("red".to_string()))).unwrap();
        assert!(id > 0);

        let fetched = tags.get_by_name(user_id, "urgent").unwrap().unwrap();
        assert_eq!(fetched.color, Some("red".to_string()));

        tags.update(user_id, id, "critical", Some("orange")).unwrap();
        let updated = tags.get_by_id(user_id, id).unwrap().unwrap();
        assert_eq!(updated.name, "critical");
        assert_eq!(updated.color, Some("orange".to_string()));

        tags.delete(user_id, id).unwrap();
        assert!(tags.get_by_id(user_id, id).unwrap().is_none());
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_duplicate_tag_name_is_rejected_per_user(ctx: &mut TagTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let other = seed_user(ctx, "other@example.com");
        let mut tags = Tags::open(&ctx.db_path).unwrap();

        tags.create(&Tag::new(user_id, "urgent".to_string(), None)).unwrap();
        assert!(tags.create(&Tag::new(user_id, "urgent".to_string(), None)).is_err());

        // The same name is fine for a different user.
        assert!(tags.create(&Tag::new(other, "urgent".to_string(), None)).is_ok());
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_page_carries_consistent_total(ctx: &mut TagTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        for name in ["alpha", "beta", "gamma", "delta", "epsilon"] {
            tags.create(&Tag::new(user_id, name.to_string(), None)).unwrap();
        }

        let page = tags.fetch_page(user_id, None, PageRequest::new(0, 2)).unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.total, 5);
        assert_eq!(page.page, 0);

        let last = tags.fetch_page(user_id, None, PageRequest::new(2, 2)).unwrap();
        assert_eq!(last.items.len(), 1);
        assert_eq!(last.total, 5);
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tag_page_search(ctx: &mut TagTestContext) {
        let user_id = seed_user(ctx, "dev@example.com");
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        for name in ["backend", "frontend", "ops"] {
            tags.create(&Tag::new(user_id, name.to_string(), None)).unwrap();
        }

        let page = tags.fetch_page(user_id, Some("end"), PageRequest::new(0, 10)).unwrap();
        assert_eq!(page.total, 2);
        let names: Vec<_> = page.items.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["backend", "frontend"]);
    }

    #[test_context(TagTestContext)]
    #[test]
    fn test_tags_are_scoped_per_user(ctx: &mut TagTestContext) {
        let owner = seed_user(ctx, "owner@example.com");
        let intruder = seed_user(ctx, "intruder@example.com");
        let mut tags = Tags::open(&ctx.db_path).unwrap();
        let id = tags.create(&Tag::new(owner, "private".to_string(), None)).unwrap();

        assert!(tags.get_by_id(intruder, id).unwrap().is_none());
        assert!(tags.list(intruder).unwrap().is_empty());
        let err = tags.delete(intruder, id).unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
