#[path = "../common/mod.rs"]
mod common;

use libpn532::tag::amiibo::{self, AmiiboCredential, CharacterId};
use libpn532::tag::catalog::CatalogStore;
use libpn532::test_support::{exchange_reply, read_reply};
use libpn532::Error;

#[test]
fn password_for_sample_uid() {
    let uid = common::fixtures::sample_uid_bytes();
    let pwd = amiibo::derive_password(&uid).unwrap();
    for i in 0..4 {
        assert_eq!(pwd[i], [0xAA, 0x55, 0xAA, 0x55][i] ^ uid[i + 1] ^ uid[i + 2]);
    }
}

#[test]
fn authenticate_and_read_through_device() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(exchange_reply(0x00, &[0x80, 0x80]));
    mock.push_response(read_reply(&common::fixtures::read_data(&[0x00, 0, 0, 0])));
    mock.push_response(read_reply(&common::fixtures::read_data(&[0x08, 0x01, 0, 0])));

    let cred = AmiiboCredential::from_uid(&common::fixtures::sample_uid()).unwrap();
    amiibo::authenticate(&mut dev, &cred).unwrap();
    let id = amiibo::read_character_id(&mut dev).unwrap();
    assert_eq!(
        id,
        CharacterId {
            char_id: 0x0008,
            variation: 0x01
        }
    );

    let mut store = CatalogStore::new();
    store.insert(id, "Toad");
    assert_eq!(amiibo::resolve_identity(Some(&store), id), "Toad");
}

#[test]
fn rejected_password() {
    let (mock, mut dev) = common::helpers::mock_device();
    mock.push_response(exchange_reply(0x01, &[]));
    let cred = AmiiboCredential::from_uid(&common::fixtures::sample_uid()).unwrap();
    assert!(matches!(
        amiibo::authenticate(&mut dev, &cred),
        Err(Error::AuthenticationFailed { status: 0x01 })
    ));
}
