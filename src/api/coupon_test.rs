use super::*;

#[test]
fn occupy_endpoint_formats_code_path() {
    assert_eq!(occupy_endpoint("WELCOME"), "/coupons/WELCOME");
}
