use crate::query::CatalogQuery;

crate::catalog_view! {
    /// One column pair of a foreign key.
    row ForeignKeyColumn, reader ForeignKeyColumnsReader;
    view "sys"."foreign_key_columns" as "fkc";
    sql r#"
        SELECT
          fkc.[constraint_object_id],
          fkc.[constraint_column_id],
          fkc.[parent_object_id],
          fkc.[parent_column_id],
          fkc.[referenced_object_id],
          fkc.[referenced_column_id]
        FROM
          [sys].[foreign_key_columns] fkc
    "#;
    columns {
        0 => constraint_object_id: i32,
        1 => constraint_column_id: i32,
        2 => parent_object_id: i32,
        3 => parent_column_id: i32,
        4 => referenced_object_id: i32,
        5 => referenced_column_id: i32,
    }
}

pub fn for_foreign_key(parent_object_id: i32, foreign_key_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA)
        .where_eq("parent_object_id", "ParentObjectId", parent_object_id)
        .where_eq("constraint_object_id", "ForeignKeyId", foreign_key_id)
        .order_by("constraint_column_id")
}
