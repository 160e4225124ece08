use chrono::NaiveDateTime;

use crate::query::CatalogQuery;

crate::catalog_view! {
    /// A FOREIGN KEY constraint.
    row ForeignKey, reader ForeignKeysReader;
    view "sys"."foreign_keys" as "fk";
    sql r#"
        SELECT
          fk.[name],
          fk.[object_id],
          fk.[principal_id],
          fk.[schema_id],
          fk.[parent_object_id],
          fk.[type] AS [object_type],
          fk.[type_desc],
          fk.[create_date],
          fk.[modify_date],
          fk.[is_ms_shipped],
          fk.[is_published],
          fk.[is_schema_published],
          fk.[referenced_object_id],
          fk.[key_index_id],
          fk.[is_disabled],
          fk.[is_not_for_replication],
          fk.[is_not_trusted],
          fk.[delete_referential_action],
          fk.[delete_referential_action_desc],
          fk.[update_referential_action],
          fk.[update_referential_action_desc],
          fk.[is_system_named]
        FROM
          [sys].[foreign_keys] fk
    "#;
    columns {
        0 => name: String,
        1 => object_id: i32,
        2 => principal_id: Option<i32>,
        3 => schema_id: i32,
        4 => parent_object_id: i32,
        5 => object_type: String,
        6 => type_desc: Option<String>,
        7 => create_date: NaiveDateTime,
        8 => modify_date: NaiveDateTime,
        9 => is_ms_shipped: bool,
        10 => is_published: bool,
        11 => is_schema_published: bool,
        12 => referenced_object_id: Option<i32>,
        13 => key_index_id: Option<i32>,
        14 => is_disabled: bool,
        15 => is_not_for_replication: bool,
        16 => is_not_trusted: bool,
        17 => delete_referential_action: Option<ReferentialAction>,
        18 => delete_referential_action_desc: Option<String>,
        19 => update_referential_action: Option<ReferentialAction>,
        20 => update_referential_action_desc: Option<String>,
        21 => is_system_named: bool,
    }
}

crate::catalog_enum! {
    pub enum ReferentialAction: u8 {
        NoAction = 0,
        Cascade = 1,
        SetNull = 2,
        SetDefault = 3,
    }
}

/// Foreign keys declared on a table.
pub fn for_table(parent_object_id: i32) -> CatalogQuery {
    CatalogQuery::new(&SCHEMA).where_eq("parent_object_id", "ParentObjectId", parent_object_id)
}
