/// Numeric admin identifier of a product gid, for links into the remote
/// admin UI. Values without the product prefix pass through untouched.
pub fn product_admin_id(gid: &str) -> String {
    gid.strip_prefix("gid://shopify/Product/")
        .unwrap_or(gid)
        .to_string()
}
