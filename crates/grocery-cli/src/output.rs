use grocery_kroger::{Location, Product};

/// One line per store: id, name, and street address.
pub(crate) fn location_line(location: &Location) -> String {
    let address = &location.address;
    format!(
        "{}  {}  {}, {}, {} {}",
        location.location_id,
        location.name,
        address.address_line1,
        address.city,
        address.state,
        address.zip_code
    )
}

/// One line per product, with the store price of its first item when known.
pub(crate) fn product_line(product: &Product) -> String {
    let price = product
        .items
        .first()
        .map(|item| item.price.regular)
        .filter(|regular| *regular > 0.0);

    match price {
        Some(regular) => format!("Product: '{}'  ${regular:.2}", product.description),
        None => format!("Product: '{}'", product.description),
    }
}
