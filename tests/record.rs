
#[cfg(test)]
mod tests {
    use super::init::init_logs;
    use quill::{
        ColumnOverrides, GenericSqlWriter, PropertyDef, Record, SqliteSqlWriter, ValueKind,
        resolve_columns,
    };
    use std::{borrow::Cow, collections::HashMap, sync::Arc};

    const WRITER: GenericSqlWriter = GenericSqlWriter::new();

    #[derive(Record)]
    #[quill(table = "Users", id = "Id")]
    #[allow(dead_code)]
    struct User {
        #[quill(name = "Id")]
        id: i32,
        #[quill(name = "Name")]
        name: String,
        #[quill(name = "Email", column = "email_address")]
        email: Option<String>,
        roles: Vec<String>,
        #[quill(skip)]
        password_hash: String,
    }

    #[derive(Record)]
    #[allow(dead_code)]
    struct OrderLine {
        id: u64,
        product_code: Cow<'static, str>,
        quantity: u32,
        _notes: Option<Arc<String>>,
        r#type: i16,
        attributes: HashMap<String, String>,
        checksum: [u8; 32],
    }

    #[test]
    fn descriptor() {
        init_logs();
        let properties = User::descriptor().properties();
        assert_eq!(properties.len(), 5);
        assert_eq!(properties[0], PropertyDef::new("Id", ValueKind::Scalar));
        assert_eq!(properties[1], PropertyDef::new("Name", ValueKind::String));
        assert_eq!(properties[2], PropertyDef::new("Email", ValueKind::String));
        assert_eq!(properties[3], PropertyDef::new("roles", ValueKind::Collection));
        assert_eq!(
            properties[4],
            PropertyDef::write_only("password_hash", ValueKind::String)
        );
        assert_eq!(User::table_name(), "Users");
        assert_eq!(User::id_property(), "Id");
        assert_eq!(
            User::column_overrides().iter().collect::<Vec<_>>(),
            [("Email", "email_address")]
        );
    }

    #[test]
    fn defaults() {
        init_logs();
        assert_eq!(OrderLine::table_name(), "order_line");
        assert_eq!(OrderLine::id_property(), "id");
        assert!(OrderLine::column_overrides().is_empty());
        let names = OrderLine::descriptor()
            .properties()
            .iter()
            .map(PropertyDef::name)
            .collect::<Vec<_>>();
        assert_eq!(
            names,
            [
                "id",
                "product_code",
                "quantity",
                "notes",
                "type",
                "attributes",
                "checksum"
            ]
        );
        let mapping = resolve_columns(OrderLine::descriptor(), OrderLine::column_overrides());
        assert_eq!(
            mapping.columns().collect::<Vec<_>>(),
            ["id", "product_code", "quantity", "notes", "type"]
        );
    }

    #[test]
    fn statements() {
        init_logs();
        assert_eq!(
            User::insert_sql(&WRITER),
            "insert into Users (Name,email_address) values (@Name,@Email);SELECT CAST(SCOPE_IDENTITY() as int)"
        );
        assert_eq!(
            User::update_sql(&WRITER),
            "update Users set Name=@Name,email_address=@Email where Id=@Id"
        );
        assert_eq!(User::delete_sql(&WRITER), "delete from Users where Id = @Id");
        assert_eq!(
            User::select_by_id_sql(&WRITER, 7),
            "select Id,Name,email_address,email_address as Email from Users where Id = 7"
        );
        assert_eq!(
            OrderLine::insert_sql(&SqliteSqlWriter::new()),
            "insert into order_line (product_code,quantity,notes,type) values (@product_code,@quantity,@notes,@type);SELECT last_insert_rowid()"
        );
        assert_eq!(
            OrderLine::update_sql(&WRITER),
            "update order_line set product_code=@product_code,quantity=@quantity,notes=@notes,type=@type where id=@id"
        );
    }

    #[test]
    fn explicit_kind() {
        init_logs();
        #[derive(Record)]
        #[quill(id = "code")]
        #[allow(dead_code)]
        struct Tagged {
            code: String,
            #[quill(kind = "scalar")]
            tags: Vec<String>,
            #[quill(kind = "collection")]
            payload: serialized::Blob,
        }
        mod serialized {
            pub struct Blob;
        }
        let overrides = ColumnOverrides::new();
        let mapping = resolve_columns(Tagged::descriptor(), &overrides);
        assert_eq!(mapping.columns().collect::<Vec<_>>(), ["code", "tags"]);
        assert_eq!(
            Tagged::update_sql(&WRITER),
            "update tagged set tags=@tags where code=@code"
        );
    }

    #[test]
    fn generic_record() {
        init_logs();
        #[derive(Record)]
        #[quill(table = "Events")]
        #[allow(dead_code)]
        struct Event<T: Clone> {
            id: i64,
            payload: T,
            history: Vec<T>,
        }
        assert_eq!(
            Event::<f64>::select_by_id_sql(&WRITER, 3),
            "select id,payload from Events where id = 3"
        );
    }

    #[test]
    fn idempotent() {
        init_logs();
        assert_eq!(User::insert_sql(&WRITER), User::insert_sql(&WRITER));
        assert_eq!(User::update_sql(&WRITER), User::update_sql(&WRITER));
        assert_eq!(
            User::select_by_id_sql(&WRITER, 1),
            User::select_by_id_sql(&WRITER, 1)
        );
    }
}
