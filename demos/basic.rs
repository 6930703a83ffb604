use ruletree::{and, field, not, or, FieldCatalog, FieldType, Translator};

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ruletree=debug".into()),
        )
        .with_target(false)
        .init();

    // Field types as the order metadata service would report them
    let fields = FieldCatalog::new()
        .field("order", "subTotal", FieldType::Monetary)
        .field("order", "currency.defaultFlag", FieldType::Boolean)
        .field("order", "locale.localeCode", FieldType::String)
        .field("order", "status", FieldType::String)
        .field("order", "submitDate", FieldType::Date);

    let rule = and([
        field("subTotal").gte("100"),
        or([
            field("currency.defaultFlag").eq("true"),
            field("locale.localeCode").eq("my"),
        ]),
        not([field("status").iequals("cancelled")]),
        field("submitDate").gte("2024-01-01"),
    ]);

    println!("{rule}");

    let translator = Translator::new();
    match translator.translate("order", &rule, &fields) {
        Ok(expr) => println!("MVEL: {expr}"),
        Err(err) => println!("Translation failed: {err}"),
    }

    // An unknown field fails the whole tree
    let broken = and([field("subTotal").gte("100"), field("couponCode").eq("X")]);
    if let Err(err) = translator.translate("order", &broken, &fields) {
        println!("Rejected: {err}");
    }
}
