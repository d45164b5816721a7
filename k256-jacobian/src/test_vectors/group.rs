//! Test vectors for the secp256k1 group.

/// Repeated addition of the generator.
///
/// These are the first 10 multiples of the generator, `[k] G` for `k = 1..=10`.
pub const ADD_TEST_VECTORS: &[(&str, &str)] = &[
    (
        "79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        "483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
    ),
    (
        "C6047F9441ED7D6D3045406E95C07CD85C778E4B8CEF3CA7ABAC09B95C709EE5",
        "1AE168FEA63DC339A3C58419466CEAEEF7F632653266D0E1236431A950CFE52A",
    ),
    (
        "F9308A019258C31049344F85F89D5229B531C845836F99B08601F113BCE036F9",
        "388F7B0F632DE8140FE337E62A37F3566500A99934C2231B6CB9FD7584B8E672",
    ),
    (
        "E493DBF1C10D80F3581E4904930B1404CC6C13900EE0758474FA94ABE8C4CD13",
        "51ED993EA0D455B75642E2098EA51448D967AE33BFBDFE40CFE97BDC47739922",
    ),
    (
        "2F8BDE4D1A07209355B4A7250A5C5128E88B84BDDC619AB7CBA8D569B240EFE4",
        "D8AC222636E5E3D6D4DBA9DDA6C9C426F788271BAB0D6840DCA87D3AA6AC62D6",
    ),
    (
        "FFF97BD5755EEEA420453A14355235D382F6472F8568A18B2F057A1460297556",
        "AE12777AACFBB620F3BE96017F45C560DE80F0F6518FE4A03C870C36B075F297",
    ),
    (
        "5CBDF0646E5DB4EAA398F365F2EA7A0E3D419B7E0330E39CE92BDDEDCAC4F9BC",
        "6AEBCA40BA255960A3178D6D861A54DBA813D0B813FDE7B5A5082628087264DA",
    ),
    (
        "2F01E5E15CCA351DAFF3843FB70F3C2F0A1BDD05E5AF888A67784EF3E10A2A01",
        "5C4DA8A741539949293D082A132D13B4C2E213D6BA5B7617B5DA2CB76CBDE904",
    ),
    (
        "ACD484E2F0C7F65309AD178A9F559ABDE09796974C57E714C35F110DFC27CCBE",
        "CC338921B0A7D9FD64380971763B61E9ADD888A4375F8E0F05CC262AC64F9C37",
    ),
    (
        "A0434D9E47F3C86235477C7B1AE6AE5D3442D49B1943C2B752A68E2A47E247C7",
        "893ABA425419BC27A3B6C7E693A24C696F794C2ED877A1593CBEE53B037368D7",
    ),
];

/// Scalar multiplication with the generator.
///
/// Tuples of `(k, [k] G.x, [k] G.y)`.
pub const MUL_TEST_VECTORS: &[(&str, &str, &str)] = &[
    (
        "AA5E28D6A97A2479A65527F7290311A3624D4CC0FA1578598EE3C2613BF99522",
        "34F9460F0E4F08393D192B3C5133A6BA099AA0AD9FD54EBCCFACDFA239FF49C6",
        "0B71EA9BD730FD8923F6D25A7A91E7DD7728A960686CB5A901BB419E0F2CA232",
    ),
    (
        "7E2B897B8CEBC6361663AD410835639826D590F393D90A9538881735256DFAE3",
        "D74BF844B0862475103D96A611CF2D898447E288D34B360BC885CB8CE7C00575",
        "131C670D414C4546B88AC3FF664611B1C38CEB1C21D76369D7A7A0969D61D97D",
    ),
    (
        "6461E6DF0FE7DFD05329F41BF771B86578143D4DD1F7866FB4CA7E97C5FA945D",
        "E8AECC370AEDD953483719A116711963CE201AC3EB21D3F3257BB48668C6A72F",
        "C25CAF2F0EBA1DDB2F0F3F47866299EF907867B7D27E95B3873BF98397B24EE1",
    ),
];
