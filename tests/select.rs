
#[cfg(test)]
mod tests {
    use super::init::{init_logs, users};
    use quill::{
        ColumnOverrides, GenericSqlWriter, MappingError, PropertyDef, RecordDescriptor,
        SqlWriter, ValueKind, resolve_columns, select_by_id,
    };

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    #[test]
    fn every_column() {
        init_logs();
        let descriptor = RecordDescriptor::new([
            PropertyDef::new("Id", ValueKind::Scalar),
            PropertyDef::new("Name", ValueKind::String),
            PropertyDef::new("Email", ValueKind::String),
        ]);
        assert_eq!(
            select_by_id(5, &descriptor, "Users", "Id", &ColumnOverrides::new()),
            "select Id,Name,Email from Users where Id = 5"
        );
    }

    #[test]
    fn override_is_listed_twice() {
        init_logs();
        let descriptor = users();
        let overrides = ColumnOverrides::from([("Email", "email_address")]);
        let mapping = resolve_columns(&descriptor, &overrides);
        let entry = mapping.get_by_property("Email").unwrap();
        assert_eq!(entry.column, "email_address");
        assert_eq!(
            WRITER.sql_select_by_id(5, &descriptor, "Users", "Id", &overrides),
            "select Id,Name,email_address,email_address as Email from Users where Id = 5"
        );
    }

    #[test]
    fn identity_is_used_verbatim() {
        init_logs();
        let overrides = ColumnOverrides::from([("Id", "user_id")]);
        assert_eq!(
            WRITER.sql_select_by_id(-42, &users(), "Users", "Id", &overrides),
            "select user_id,Name,Email,user_id as Id from Users where Id = -42"
        );
        assert_eq!(
            WRITER.sql_select_by_id(i64::MAX, &users(), "Users", "Id", &ColumnOverrides::new()),
            "select Id,Name,Email from Users where Id = 9223372036854775807"
        );
    }

    #[test]
    fn overrides_follow_insertion_order() {
        init_logs();
        let mut overrides = ColumnOverrides::new();
        overrides.insert("Email", "mail").insert("Name", "full_name");
        assert_eq!(
            WRITER.sql_select_by_id(1, &users(), "Users", "Id", &overrides),
            "select Id,full_name,mail,mail as Email,full_name as Name from Users where Id = 1"
        );
    }

    #[test]
    fn unmatched_override_is_still_aliased() {
        init_logs();
        let descriptor = RecordDescriptor::new([PropertyDef::new("Tags", ValueKind::Collection)]);
        let overrides = ColumnOverrides::from([("Tags", "tags")]);
        assert_eq!(
            WRITER.sql_select_by_id(1, &descriptor, "Posts", "Id", &overrides),
            "select ,tags as Tags from Posts where Id = 1"
        );
    }

    #[test]
    fn checked_rejects_collisions() {
        init_logs();
        let overrides = ColumnOverrides::from([("Name", "Email")]);
        let error = WRITER
            .try_sql_select_by_id(1, &users(), "Users", "Id", &overrides)
            .unwrap_err();
        assert!(matches!(
            error.downcast_ref::<MappingError>(),
            Some(MappingError::DuplicateColumn { .. })
        ));
        assert_eq!(
            WRITER
                .try_sql_select_by_id(1, &users(), "Users", "Id", &ColumnOverrides::new())
                .unwrap(),
            "select Id,Name,Email from Users where Id = 1"
        );
    }

    #[test]
    fn empty_column_keeps_its_slot() {
        init_logs();
        let overrides = ColumnOverrides::from([("Name", "")]);
        assert_eq!(
            WRITER.sql_select_by_id(2, &users(), "Users", "Id", &overrides),
            "select Id,,Email, as Name from Users where Id = 2"
        );
    }
}
