/// Builds the field list of an [`EnvStruct`](crate::EnvStruct) in declaration order.
///
/// Each entry is `leaf` or `nested`, the field name, `=>`, and the accessor,
/// optionally followed by `Field` modifiers such as `rename("X")` or `ignore()`.
/// Entries are separated by `;`.
///
/// ```rust
/// use serde_envfile::{env_fields, to_string, EnvStruct, Field};
///
/// struct Db {
///     host: String,
/// }
///
/// impl EnvStruct for Db {
///     fn fields() -> Vec<Field<Self>> {
///         env_fields! {
///             leaf "Host" => |db: &Db| &db.host;
///         }
///     }
/// }
///
/// struct App {
///     name: String,
///     token: String,
///     db: Option<Db>,
/// }
///
/// impl EnvStruct for App {
///     fn fields() -> Vec<Field<Self>> {
///         env_fields! {
///             leaf "name" => |app: &App| &app.name, rename("NAME");
///             leaf "token" => |app: &App| &app.token, ignore();
///             nested "DB" => |app: &App| app.db.as_ref();
///         }
///     }
/// }
///
/// let app = App {
///     name: "svc".to_string(),
///     token: "secret".to_string(),
///     db: Some(Db { host: "x".to_string() }),
/// };
/// assert_eq!(to_string(&app).unwrap(), "NAME = svc\nDB_Host = x\n");
/// ```
#[macro_export]
macro_rules! env_fields {
    () => {
        ::std::vec::Vec::new()
    };

    ($( $kind:ident $name:literal => $get:expr $(, $modifier:ident ( $($arg:expr),* ))* );+ $(;)?) => {
        vec![
            $(
                $crate::Field::$kind($name, $get) $( .$modifier($($arg),*) )*
            ),+
        ]
    };
}
