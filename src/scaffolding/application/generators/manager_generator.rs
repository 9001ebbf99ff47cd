use crate::scaffolding::{
    application::generators::{
        table_naming::{manager_class_name, record_type_name},
        template_renderer::{TemplateTokens, render_template},
    },
    domain::model::{
        entities::{
            generated_unit::GeneratedUnit, table_attribute::TableAttribute,
            table_description::TableDescription,
        },
        enums::generated_unit_kind::GeneratedUnitKind,
    },
};

const LINE: &str = "            ";

pub fn generate_manager_file(description: &TableDescription, template: &str) -> GeneratedUnit {
    let table_name = description.table_name().value();
    let class_name = manager_class_name(table_name);
    let record_type = record_type_name(table_name);
    let columns = description.attributes();
    let pk_columns: Vec<&TableAttribute> = description.primary_keys().collect();

    let variables = format!("    Private _Cols As {record_type}");
    let constructor_inits = format!("        _Cols = New {record_type}");
    let properties = [
        format!("    Public Property Col() As {record_type}"),
        "        Get".to_string(),
        "            Return _Cols".to_string(),
        "        End Get".to_string(),
        format!("        Set(ByVal Value As {record_type})"),
        "            _Cols = Value".to_string(),
        "        End Set".to_string(),
        "    End Property".to_string(),
    ]
    .join("\n");

    let insert_lines = join_lines(columns.iter().map(|c| {
        if c.is_identity() {
            format!(
                "{LINE}_Insert.Into(\"{}\", New TValue(GetNext_Identity))",
                c.column_name()
            )
        } else {
            format!(
                "{LINE}_Insert.Into(\"{}\", New TValue(_Cols.{}))",
                c.column_name(),
                c.name().value()
            )
        }
    }));

    let update_set_lines = join_lines(
        columns
            .iter()
            .filter(|c| !c.is_primary() && !c.is_identity())
            .map(|c| {
                format!(
                    "{LINE}_Update.SetValue(\"{}\", New TValue(_Cols.{}))",
                    c.column_name(),
                    c.name().value()
                )
            }),
    );

    let where_pk_lines_update = join_lines(pk_columns.iter().map(|c| {
        format!(
            "{LINE}_Update.Where(New TField(\"{}\"), OperadoresFiltros.Igual, New TValue(_Cols.{}))",
            c.column_name(),
            c.name().value()
        )
    }));
    let where_pk_lines_delete = join_lines(pk_columns.iter().map(|c| {
        format!(
            "{LINE}_Delete.Where(New TField(\"{}\"), OperadoresFiltros.Igual, New TValue(_Cols.{}))",
            c.column_name(),
            c.name().value()
        )
    }));
    let where_pk_lines_list_key = join_lines(pk_columns.iter().map(|c| {
        format!(
            "{LINE}_Query.Where(New TField(\"A\", \"{}\"), OperadoresFiltros.Igual, New TValue(_Cols.{}))",
            c.column_name(),
            c.name().value()
        )
    }));

    let select_list_key_fields = join_lines(columns.iter().map(|c| {
        format!(
            "{LINE}_Query.Selected(New TField(\"A\", \"{col}\", \"{col}\"))",
            col = c.column_name()
        )
    }));

    let select_list_fields = select_list_fields(columns, &pk_columns);
    let list_where_example = list_where_example(columns, &pk_columns);

    let default_order_field = pk_columns
        .first()
        .copied()
        .or_else(|| columns.first())
        .map(|c| c.column_name().to_string())
        .unwrap_or_default();

    let record_load_lines = join_lines(
        columns
            .iter()
            .map(|c| format!("{LINE}_Cols.{} = .Item(\"{}\")", c.name().value(), c.column_name())),
    );

    let tokens = TemplateTokens::new()
        .with("TABLE_NAME", table_name)
        .with("CLASS_NAME", class_name.clone())
        .with("VARIABLES", variables)
        .with("CONSTRUCTOR_INITS", constructor_inits)
        .with("PROPERTIES", properties)
        .with("INSERT_LINES", insert_lines)
        .with("UPDATE_SET_LINES", update_set_lines)
        .with("WHERE_PK_LINES_UPDATE", where_pk_lines_update)
        .with("WHERE_PK_LINES_DELETE", where_pk_lines_delete)
        .with("WHERE_PK_LINES_LISTKEY", where_pk_lines_list_key)
        .with("SELECT_LISTKEY_FIELDS", select_list_key_fields)
        .with("SELECT_LIST_FIELDS", select_list_fields)
        .with("LIST_WHERE_EXAMPLE", list_where_example)
        .with("DEFAULT_ORDER_FIELD", default_order_field)
        .with("RECORD_LOAD_LINES", record_load_lines)
        .with("GET_NEXT_IDENTITY", next_identity_body(description));

    GeneratedUnit {
        kind: GeneratedUnitKind::Manager,
        filename: format!("{class_name}.vb"),
        content: render_template(template, &tokens),
        title: None,
        placement_hint: Some(format!(
            "Data-access class that talks to the database. Place the file in the '{}' project.",
            description.category().as_str()
        )),
    }
}

fn join_lines(lines: impl Iterator<Item = String>) -> String {
    lines.collect::<Vec<_>>().join("\n")
}

/// Lead field is the first non-identity PK, then the first PK, then the first column.
fn select_list_fields(columns: &[TableAttribute], pk_columns: &[&TableAttribute]) -> String {
    let lead = pk_columns
        .iter()
        .copied()
        .find(|c| !c.is_identity())
        .or_else(|| pk_columns.first().copied())
        .or_else(|| columns.first());

    let Some(lead) = lead else {
        return String::new();
    };

    std::iter::once(lead)
        .chain(columns.iter().filter(|c| c.column_name() != lead.column_name()))
        .map(|c| {
            format!(
                "{LINE}_Query.Selected(New TField(\"A\", \"{col}\", \"{col}\"))",
                col = c.column_name()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

fn list_where_example(columns: &[TableAttribute], pk_columns: &[&TableAttribute]) -> String {
    let first_non_identity_pk = pk_columns
        .iter()
        .copied()
        .find(|c| !c.is_identity())
        .or_else(|| pk_columns.first().copied())
        .or_else(|| columns.first());
    let identity_pk = pk_columns
        .iter()
        .copied()
        .find(|c| c.is_identity())
        .or_else(|| pk_columns.first().copied())
        .or_else(|| columns.first());
    let text_column = columns
        .iter()
        .find(|c| c.sql_type().is_text())
        .or(first_non_identity_pk);

    let (Some(lead_pk), Some(identity_pk), Some(text_column)) =
        (first_non_identity_pk, identity_pk, text_column)
    else {
        return String::new();
    };

    let by_name = format!(
        "                _Query.Where(New TField(\"A\", \"{}\"), OperadoresFiltros.Parecido, New TConjunto(Param.Nombre))",
        text_column.column_name()
    );

    if pk_columns.len() > 1 {
        [
            String::new(),
            format!(
                "{LINE}_Query.Where(New TField(\"A\", \"{}\"), OperadoresFiltros.Igual, New TValue(Param.Empresa))",
                lead_pk.column_name()
            ),
            format!("{LINE}If Param.TipoFiltro = TParam.Nombre Then 'Por Nombre"),
            by_name,
            format!("{LINE}ElseIf Param.TipoFiltro = TParam.Codigo Then 'Por Codigo"),
            format!(
                "                _Query.Where(New TField(\"A\", \"{}\"), OperadoresFiltros.Igual, New TValue(Param.Id))",
                identity_pk.column_name()
            ),
            format!("{LINE}End If"),
        ]
        .join("\n")
    } else {
        // a single key makes the company pre-filter and the code branch redundant
        [
            String::new(),
            format!("{LINE}If Param.TipoFiltro = TParam.Nombre Then 'Por Nombre"),
            by_name,
            format!("{LINE}End If"),
        ]
        .join("\n")
    }
}

fn next_identity_body(description: &TableDescription) -> String {
    let Some(identity) = description.identity_attribute() else {
        return "        ' No identity column defined\n        Return 1".to_string();
    };

    let where_lines: String = description
        .primary_keys()
        .filter(|c| c.column_name() != identity.column_name())
        .map(|c| {
            format!(
                "        _Query.Where(New TField(\"A\", \"{}\"), OperadoresFiltros.Igual, New TValue(_Cols.{}))\n",
                c.column_name(),
                c.name().value()
            )
        })
        .collect();

    format!(
        "        Dim _Query As New TQuery(_Transaccion.Conexion)
        _Query.Selected(New TMax(New TField(\"A\", \"{identity}\"), \"Maximo\"))
        _Query.From(New TFrom(\"{table}\", \"A\"))
{where_lines}        If _Query.Open Then
            If IsDBNull(_Query.Data.Rows(0).Item(\"Maximo\")) Then
                Return 1
            Else
                Return _Query.Data.Rows(0).Item(\"Maximo\") + 1
            End If
        Else
            Return 1
        End If",
        identity = identity.column_name(),
        table = description.table_name().value(),
    )
}
