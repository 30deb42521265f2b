//! Lookup tables for decimal-to-binary conversions.
//!
//! All tables are indexed by the biased decimal exponent `e +
//! 80`, covering `e` in [-80, 39). Exponents outside that range
//! are trivial overflow or are clamped by the conversion before
//! indexing.

use super::uint256::u256;
use crate::util::const_assert;

/// The bias applied to a decimal exponent before indexing.
pub(super) const EXP_BIAS: i32 = 80;

/// The number of table entries.
pub(super) const NUM_ENTRIES: usize = 119;

/// The smallest decimal exponent with a table entry.
///
/// Smaller exponents can be clamped: at 10^-80 even the largest
/// coefficient is far below half the smallest subnormal, so
/// only the sticky bits see the difference.
pub(super) const MIN_EXP: i32 = -EXP_BIAS;

/// One past the largest decimal exponent with a table entry.
///
/// At 10^39 even a coefficient of 1 overflows binary32.
pub(super) const MAX_EXP: i32 = 39;
const_assert!(MAX_EXP + EXP_BIAS == 119 && NUM_ENTRIES == 119);

/// Binade breakpoints.
///
/// Each entry is the largest normalized coefficient `c` in
/// [2^112, 2^113) such that `c * 10^e` stays below the binade
/// boundary 2^(E+1), where `E = floor(log2(10^e * 2^112))`.
/// Coefficients at or below the breakpoint use
/// [`MULTIPLIERS_LO`]; larger coefficients use
/// [`MULTIPLIERS_HI`] and a binary exponent one higher.
#[rustfmt::skip]
pub(super) const BREAKPOINTS: [u128; NUM_ENTRIES] = [
    0x0001afcef51f0fb5eff7b866e8bd92f7, // 10^-80
    0x000159725db272f7f32c938586fe0f2c, // 10^-79
    0x0001145b7e285bf98f56dc6ad264d8f0, // 10^-78
    0x0001ba2bfd0d5ff5b22493de1d6e27e7, // 10^-77
    0x000161bcca7119915b50764b4abe8652, // 10^-76
    0x00011afd6ec0e14115d9f83c3bcb9ea8, // 10^-75
    0x0001c4c8b1349b9b56298d2d2c78fdda, // 10^-74
    0x00016a3a275d494911bad75756c7317b, // 10^-73
    0x000121c81f7dd43a74957912abd28dfc, // 10^-72
    0x0001cfa698c95390ba88c1b77950e32d, // 10^-71
    0x000172ebad6ddc73c86d67c5faa71c24, // 10^-70
    0x000128bc8abe49f639f11fd195527ce9, // 10^-69
    0x0001dac74463a989f64e994f5550c7dc, // 10^-68
    0x00017bd29d1c87a191d87aa5ddda397d, // 10^-67
    0x00012fdbb0e39fb474ad2eeb17e1c797, // 10^-66
    0x0001e62c4e38ff87211517de8c9c728b, // 10^-65
    0x000184f03e93ff9f4daa797ed6e38ed6, // 10^-64
    0x00013726987666190aeec798abe93f11, // 10^-63
    0x0001f1d75a5709c1ab17a5c1130ecb4f, // 10^-62
    0x00018e45e1df3b0155ac849a75a56f72, // 10^-61
    0x00013e9e4e4c2f34448a03aec4845928, // 10^-60
    0x0001fdca16e04b86d41005e46da08ea7, // 10^-59
    0x000197d4df19d605767337e9f14d3eec, // 10^-58
    0x00014643e5ae44d12b8f5fee5aa43256, // 10^-57
    0x000105031e2503da893f7ff1e21cf512, // 10^-56
    0x0001a19e96a19fc40ecbffe969c7ee83, // 10^-55
    0x00014e1878814c9cd8a33321216cbecf, // 10^-54
    0x00010b46c6cdd6e3e0828f4db456ff0c, // 10^-53
    0x0001aba4714957d300d0e549208b31ad, // 10^-52
    0x0001561d276ddfdc00a71dd41a08f48a, // 10^-51
    0x000111b0ec57e6499a1f4b1014d3f6d5, // 10^-50
    0x0001b5e7e08ca3a8f6987819baecbe22, // 10^-49
    0x00015e531a0a1c872bad2ce16256fe81, // 10^-48
    0x000118427b3b4a05bc8a8a4de8459867, // 10^-47
    0x0001c06a5ec5433c60ddaa16406f5a3f, // 10^-46
    0x000166bb7f0435c9e717bb45005914ff, // 10^-45
    0x00011efc659cf7d4b8dfc904004743ff, // 10^-44
    0x0001cb2d6f618c878e32db399a0b9fff, // 10^-43
    0x00016f578c4e0a060b5be2947b3c7fff, // 10^-42
    0x000125dfa371a19e6f7cb54395c9ffff, // 10^-41
    0x0001d6329f1c35ca4bfabb9f560fffff, // 10^-40
    0x000178287f49c4a1d6622fb2ab3fffff, // 10^-39
    0x00012ced32a16a1b11e8262888ffffff, // 10^-38
    0x0001e17b84357691b6403d0da7ffffff, // 10^-37
    0x0001812f9cf7920e2b66973e1fffffff, // 10^-36
    0x00013426172c74d822b878fe7fffffff, // 10^-35
    0x0001ed09bead87c0378d8e63ffffffff, // 10^-34
    0x00018a6e32246c99c60ad84fffffffff, // 10^-33
    0x00013b8b5b5056e16b3be03fffffffff, // 10^-32
    0x0001f8def8808b02452c99ffffffffff, // 10^-31
    0x000193e5939a08ce9dbd47ffffffffff, // 10^-30
    0x0001431e0fae6d7217ca9fffffffffff, // 10^-29
    0x0001027e72f1f12813087fffffffffff, // 10^-28
    0x00019d971e4fe8401e73ffffffffffff, // 10^-27
    0x00014adf4b7320334b8fffffffffffff, // 10^-26
    0x000108b2a2c28029093fffffffffffff, // 10^-25
    0x0001a784379d99db41ffffffffffffff, // 10^-24
    0x000152d02c7e14af67ffffffffffffff, // 10^-23
    0x00010f0cf064dd591fffffffffffffff, // 10^-22
    0x0001b1ae4d6e2ef4ffffffffffffffff, // 10^-21
    0x00015af1d78b58c3ffffffffffffffff, // 10^-20
    0x0001158e460913cfffffffffffffffff, // 10^-19
    0x0001bc16d674ec7fffffffffffffffff, // 10^-18
    0x00016345785d89ffffffffffffffffff, // 10^-17
    0x00011c37937e07ffffffffffffffffff, // 10^-16
    0x0001c6bf52633fffffffffffffffffff, // 10^-15
    0x00016bcc41e8ffffffffffffffffffff, // 10^-14
    0x00012309ce53ffffffffffffffffffff, // 10^-13
    0x0001d1a94a1fffffffffffffffffffff, // 10^-12
    0x000174876e7fffffffffffffffffffff, // 10^-11
    0x00012a05f1ffffffffffffffffffffff, // 10^-10
    0x0001dcd64fffffffffffffffffffffff, // 10^-9
    0x00017d783fffffffffffffffffffffff, // 10^-8
    0x0001312cffffffffffffffffffffffff, // 10^-7
    0x0001e847ffffffffffffffffffffffff, // 10^-6
    0x0001869fffffffffffffffffffffffff, // 10^-5
    0x0001387fffffffffffffffffffffffff, // 10^-4
    0x0001f3ffffffffffffffffffffffffff, // 10^-3
    0x00018fffffffffffffffffffffffffff, // 10^-2
    0x00013fffffffffffffffffffffffffff, // 10^-1
    0x0001ffffffffffffffffffffffffffff, // 10^0
    0x00019999999999999999999999999999, // 10^1
    0x000147ae147ae147ae147ae147ae147a, // 10^2
    0x00010624dd2f1a9fbe76c8b439581062, // 10^3
    0x0001a36e2eb1c432ca57a786c226809d, // 10^4
    0x00014f8b588e368f08461f9f01b866e4, // 10^5
    0x00010c6f7a0b5ed8d36b4c7f34938583, // 10^6
    0x0001ad7f29abcaf485787a6520ec08d2, // 10^7
    0x00015798ee2308c39df9fb841a566d74, // 10^8
    0x000112e0be826d694b2e62d01511f12a, // 10^9
    0x0001b7cdfd9d7bdbab7d6ae6881cb510, // 10^10
    0x00015fd7fe17964955fdef1ed34a2a73, // 10^11
    0x000119799812dea11197f27f0f6e885c, // 10^12
    0x0001c25c268497681c2650cb4be40d60, // 10^13
    0x00016849b86a12b9b01ea70909833de7, // 10^14
    0x0001203af9ee756159b21f3a6e0297ec, // 10^15
    0x0001cd2b297d889bc2b6985d7cd0f313, // 10^16
    0x000170ef54646d496892137dfd73f5a9, // 10^17
    0x00012725dd1d243aba0e75fe645cc487, // 10^18
    0x0001d83c94fb6d2ac34a5663d3c7a0d8, // 10^19
    0x000179ca10c9242235d511e976394d79, // 10^20
    0x00012e3b40a0e9b4f7dda7edf82dd794, // 10^21
    0x0001e392010175ee5962a6498d1625ba, // 10^22
    0x000182db34012b25144eeb6e0a781e2f, // 10^23
    0x0001357c299a88ea76a58924d52ce4f2, // 10^24
    0x0001ef2d0f5da7dd8aa27507bb7b07ea, // 10^25
    0x00018c240c4aecb13bb52a6c95fc0655, // 10^26
    0x00013ce9a36f23c0fc90eebd44c99eaa, // 10^27
    0x0001fb0f6be50601941b17953adc3110, // 10^28
    0x000195a5efea6b34767c12ddc8b02740, // 10^29
    0x00014484bfeebc29f863424b06f3529a, // 10^30
    0x0001039d66589687f9e901d59f290ee1, // 10^31
    0x00019f623d5a8a732974cfbc31db4b02, // 10^32
    0x00014c4e977ba1f5bac3d9635b15d59b, // 10^33
    0x000109d8792fb4c495697ab5e277de16, // 10^34
    0x0001a95a5b7f87a0ef0f2abc9d8c9689, // 10^35
    0x000154484932d2e725a5bbca17a3aba1, // 10^36
    0x00011039d428a8b8eaeafca1ac82efb4, // 10^37
    0x0001b38fb9daa78e44ab2dcf7a6b1920, // 10^38
];

/// Base binary exponents.
///
/// Each entry is the biased binary32 exponent of `c * 10^e` for
/// a normalized coefficient at or below the breakpoint, less the
/// fixed 89-bit normalization offset. The conversion subtracts
/// the per-value normalization shift and adds one when the high
/// multiplier is selected.
#[rustfmt::skip]
pub(super) const EXPONENTS: [i16; NUM_ENTRIES] = [
    -116, -113, -110, -106, -103, -100, -96, -93, // 10^-80..
    -90, -86, -83, -80, -76, -73, -70, -66, // 10^-72..
    -63, -60, -56, -53, -50, -46, -43, -40, // 10^-64..
    -37, -33, -30, -27, -23, -20, -17, -13, // 10^-56..
    -10, -7, -3, 0, 3, 7, 10, 13, // 10^-48..
    17, 20, 23, 27, 30, 33, 37, 40, // 10^-40..
    43, 47, 50, 53, 56, 60, 63, 66, // 10^-32..
    70, 73, 76, 80, 83, 86, 90, 93, // 10^-24..
    96, 100, 103, 106, 110, 113, 116, 120, // 10^-16..
    123, 126, 130, 133, 136, 140, 143, 146, // 10^-8..
    150, 153, 156, 159, 163, 166, 169, 173, // 10^0..
    176, 179, 183, 186, 189, 193, 196, 199, // 10^8..
    203, 206, 209, 213, 216, 219, 223, 226, // 10^16..
    229, 233, 236, 239, 243, 246, 249, 252, // 10^24..
    256, 259, 262, 266, 269, 272, 276, // 10^32..
];

/// Reciprocal multipliers for the low binade.
///
/// Each entry is `ceil(10^e * 2^(343 - E))` where `E =
/// floor(log2(10^e * 2^112))`. Multiplying the top word of the
/// normalized coefficient by this constant yields the
/// provisional significand in the top word of the 320-bit
/// product and the round/sticky bits in the next two words.
#[rustfmt::skip]
pub(super) const MULTIPLIERS_LO: [u256; NUM_ENTRIES] = [
    u256::from_parts(0x00000097c560ba6b0919a5dccd879fc9, 0x67d41a021da8c6f15375a13ad57881e8), // 10^-80
    u256::from_parts(0x000000bdb6b8e905cb600f5400e987bb, 0xc1c92082a512f8ada85309898ad6a262), // 10^-79
    u256::from_parts(0x000000ed246723473e3813290123e9aa, 0xb23b68a34e57b6d91267cbebed8c4afa), // 10^-78
    u256::from_parts(0x0000009436c0760c86e30bf9a0b6720a, 0xaf65216610f6d247ab80df737477aedc), // 10^-77
    u256::from_parts(0x000000b94470938fa89bcef808e40e8d, 0x5b3e69bf953486d99661175051959a93), // 10^-76
    u256::from_parts(0x000000e7958cb87392c2c2b60b1d1230, 0xb20e042f7a81a88ffbf95d2465fb0138), // 10^-75
    u256::from_parts(0x00000090bd77f3483bb9b9b1c6f22b5e, 0x6f48c29dac910959fd7bda36bfbce0c3), // 10^-74
    u256::from_parts(0x000000b4ecd5f01a4aa8281e38aeb636, 0x0b1af34517b54bb07cdad0c46fac18f4), // 10^-73
    u256::from_parts(0x000000e2280b6c20dd523225c6da63c3, 0x8de1b0165da29e9c9c1184f58b971f31), // 10^-72
    u256::from_parts(0x0000008d590723948a535f579c487e5a, 0x38ad0e0dfa85a321e18af319773e737f), // 10^-71
    u256::from_parts(0x000000b0af48ec79ace8372d835a9df0, 0xc6d8519179270bea59edafdfd50e105e), // 10^-70
    u256::from_parts(0x000000dcdb1b2798182244f8e431456c, 0xf88e65f5d770cee4f0691bd7ca519476), // 10^-69
    u256::from_parts(0x0000008a08f0f8bf0f156b1b8e9ecb64, 0x1b58ffb9a6a6814f1641b166de72fcca), // 10^-68
    u256::from_parts(0x000000ac8b2d36eed2dac5e272467e3d, 0x222f3fa8105021a2dbd21dc0960fbbfc), // 10^-67
    u256::from_parts(0x000000d7adf884aa8791775b0ed81dcc, 0x6abb0f9214642a0b92c6a530bb93aafb), // 10^-66
    u256::from_parts(0x00000086ccbb52ea94baea98e947129f, 0xc2b4e9bb4cbe9a473bbc273e753c4add), // 10^-65
    u256::from_parts(0x000000a87fea27a539e9a53f2398d747, 0xb362242a1fee40d90aab310e128b5d94), // 10^-64
    u256::from_parts(0x000000d29fe4b18e88640e8eec7f0d19, 0xa03aad34a7e9d10f4d55fd51972e34f9), // 10^-63
    u256::from_parts(0x00000083a3eeeef9153e891953cf6830, 0x0424ac40e8f222a99055be52fe7ce11c), // 10^-62
    u256::from_parts(0x000000a48ceaaab75a8e2b5fa8c3423c, 0x052dd751232eab53f46b2de7be1c1963), // 10^-61
    u256::from_parts(0x000000cdb02555653131b63792f412cb, 0x06794d256bfa5628f185f961ada31fbb), // 10^-60
    u256::from_parts(0x000000808e17555f3ebf11e2bbd88bbe, 0xe40bd037637c75d996f3bbdd0c85f3d5), // 10^-59
    u256::from_parts(0x000000a0b19d2ab70e6ed65b6aceaeae, 0x9d0ec4453c5b934ffcb0aad44fa770ca), // 10^-58
    u256::from_parts(0x000000c8de047564d20a8bf245825a5a, 0x445275568b727823fbdcd58963914cfd), // 10^-57
    u256::from_parts(0x000000fb158592be068d2eeed6e2f0f0, 0xd56712ac2e4f162cfad40aebbc75a03c), // 10^-56
    u256::from_parts(0x0000009ced737bb6c4183d55464dd696, 0x85606bab9cf16ddc1cc486d355c98426), // 10^-55
    u256::from_parts(0x000000c428d05aa4751e4caa97e14c3c, 0x26b88696842dc95323f5a8882b3be52f), // 10^-54
    u256::from_parts(0x000000f53304714d9265dfd53dd99f4b, 0x3066a83c25393ba7ecf312aa360ade7a), // 10^-53
    u256::from_parts(0x000000993fe2c6d07b7fabe546a8038e, 0xfe4029259743c548f417ebaa61c6cb0d), // 10^-52
    u256::from_parts(0x000000bf8fdb78849a5f96de98520472, 0xbdd0336efd14b69b311de694fa387dd0), // 10^-51
    u256::from_parts(0x000000ef73d256a5c0f77c963e66858f, 0x6d44404abc59e441fd65603a38c69d44), // 10^-50
    u256::from_parts(0x00000095a8637627989aaddde7001379, 0xa44aa82eb5b82ea93e5f5c24637c224a), // 10^-49
    u256::from_parts(0x000000bb127c53b17ec1595560c01858, 0x0d5d523a63263a538df7332d7c5b2add), // 10^-48
    u256::from_parts(0x000000e9d71b689dde71afaab8f01e6e, 0x10b4a6c8fbefc8e87174fff8db71f594), // 10^-47
    u256::from_parts(0x0000009226712162ab070dcab3961304, 0xca70e83d9d75dd9146e91ffb8927397d), // 10^-46
    u256::from_parts(0x000000b6b00d69bb55c8d13d607b97c5, 0xfd0d224d04d354f598a367fa6b7107dc), // 10^-45
    u256::from_parts(0x000000e45c10c42a2b3b058cb89a7db7, 0x7c506ae046082a32fecc41f9064d49d3), // 10^-44
    u256::from_parts(0x0000008eb98a7a9a5b04e377f3608e92, 0xadb242cc2bc51a5fdf3fa93ba3f04e24), // 10^-43
    u256::from_parts(0x000000b267ed1940f1c61c55f038b237, 0x591ed37f36b660f7d70f938a8cec61ad), // 10^-42
    u256::from_parts(0x000000df01e85f912e37a36b6c46dec5, 0x2f66885f0463f935ccd3786d30277a18), // 10^-41
    u256::from_parts(0x0000008b61313bbabce2c62323ac4b3b, 0x3da0153b62be7bc1a0042b443e18ac4f), // 10^-40
    u256::from_parts(0x000000ae397d8aa96c1b77abec975e0a, 0x0d081a8a3b6e1ab2080536154d9ed763), // 10^-39
    u256::from_parts(0x000000d9c7dced53c7225596e7bd358c, 0x904a212cca49a15e8a06839aa1068d3b), // 10^-38
    u256::from_parts(0x000000881cea14545c75757e50d64177, 0xda2e54bbfe6e04db16441240a4a41845), // 10^-37
    u256::from_parts(0x000000aa242499697392d2dde50bd1d5, 0xd0b9e9eafe098611dbd516d0cdcd1e56), // 10^-36
    u256::from_parts(0x000000d4ad2dbfc3d07787955e4ec64b, 0x44e86465bd8be79652ca5c85014065ec), // 10^-35
    u256::from_parts(0x00000084ec3c97da624ab4bd5af13bef, 0x0b113ebf967770bdf3be79d320c83fb3), // 10^-34
    u256::from_parts(0x000000a6274bbdd0fadd61ecb1ad8aea, 0xcdd58e6f7c154ced70ae1847e8fa4fa0), // 10^-33
    u256::from_parts(0x000000cfb11ead453994ba67de18eda5, 0x814af20b5b1aa028ccd99e59e338e388), // 10^-32
    u256::from_parts(0x00000081ceb32c4b43fcf480eacf9487, 0x70ced74718f0a419800802f82e038e35), // 10^-31
    u256::from_parts(0x000000a2425ff75e14fc31a1258379a9, 0x4d028d18df2ccd1fe00a03b6398471c2), // 10^-30
    u256::from_parts(0x000000cad2f7f5359a3b3e096ee45813, 0xa043305f16f80067d80c84a3c7e58e33), // 10^-29
    u256::from_parts(0x000000fd87b5f28300ca0d8bca9d6e18, 0x8853fc76dcb60081ce0fa5ccb9def1c0), // 10^-28
    u256::from_parts(0x0000009e74d1b791e07e48775ea264cf, 0x55347dca49f1c05120c9c79ff42b5718), // 10^-27
    u256::from_parts(0x000000c612062576589dda95364afe03, 0x2a819d3cdc6e306568fc3987f1362cde), // 10^-26
    u256::from_parts(0x000000f79687aed3eec5513a83ddbd83, 0xf522048c1389bc7ec33b47e9ed83b815), // 10^-25
    u256::from_parts(0x0000009abe14cd44753b52c4926a9672, 0x793542d78c3615cf3a050cf23472530d), // 10^-24
    u256::from_parts(0x000000c16d9a0095928a2775b7053c0f, 0x1782938d6f439b430886502ec18ee7d1), // 10^-23
    u256::from_parts(0x000000f1c90080baf72cb15324c68b12, 0xdd633870cb148213caa7e43a71f2a1c5), // 10^-22
    u256::from_parts(0x000000971da05074da7beed3f6fc16eb, 0xca5e03467eecd14c5ea8eea48737a51b), // 10^-21
    u256::from_parts(0x000000bce5086492111aea88f4bb1ca6, 0xbcf584181ea8059f76532a4da9058e62), // 10^-20
    u256::from_parts(0x000000ec1e4a7db69561a52b31e9e3d0, 0x6c32e51e2652070753e7f4e11346f1fa), // 10^-19
    u256::from_parts(0x0000009392ee8e921d5d073aff322e62, 0x439fcf32d7f344649470f90cac0c573c), // 10^-18
    u256::from_parts(0x000000b877aa3236a4b44909befeb9fa, 0xd487c2ff8df0157db98d374fd70f6d0b), // 10^-17
    u256::from_parts(0x000000e69594bec44de15b4c2ebe6879, 0x89a9b3bf716c1add27f08523ccd3484e), // 10^-16
    u256::from_parts(0x000000901d7cf73ab0acd90f9d37014b, 0xf60a1057a6e390ca38f6533660040d31), // 10^-15
    u256::from_parts(0x000000b424dc35095cd80f538484c19e, 0xf38c946d909c74fcc733e803f805107d), // 10^-14
    u256::from_parts(0x000000e12e13424bb40e132865a5f206, 0xb06fb988f4c3923bf900e204f606549c), // 10^-13
    u256::from_parts(0x0000008cbccc096f5088cbf93f87b744, 0x2e45d3f598fa3b657ba08d4319c3f4e2), // 10^-12
    u256::from_parts(0x000000afebff0bcb24aafef78f69a515, 0x39d748f2ff38ca3eda88b093e034f21a), // 10^-11
    u256::from_parts(0x000000dbe6fecebdedd5beb573440e5a, 0x884d1b2fbf06fcce912adcb8d8422ea1), // 10^-10
    u256::from_parts(0x00000089705f4136b4a59731680a88f8, 0x953030fdd7645e011abac9f387295d25), // 10^-9
    u256::from_parts(0x000000abcc77118461cefcfdc20d2b36, 0xba7c3d3d4d3d758161697c7068f3b46e), // 10^-8
    u256::from_parts(0x000000d6bf94d5e57a42bc3d32907604, 0x691b4c8ca08cd2e1b9c3db8c8330a189), // 10^-7
    u256::from_parts(0x0000008637bd05af6c69b5a63f9a49c2, 0xc1b10fd7e45803cd141a6937d1fe64f6), // 10^-6
    u256::from_parts(0x000000a7c5ac471b4784230fcf80dc33, 0x721d53cddd6e04c059210385c67dfe33), // 10^-5
    u256::from_parts(0x000000d1b71758e219652bd3c3611340, 0x4ea4a8c154c985f06f694467381d7dc0), // 10^-4
    u256::from_parts(0x00000083126e978d4fdf3b645a1cac08, 0x3126e978d4fdf3b645a1cac083126e98), // 10^-3
    u256::from_parts(0x000000a3d70a3d70a3d70a3d70a3d70a, 0x3d70a3d70a3d70a3d70a3d70a3d70a3e), // 10^-2
    u256::from_parts(0x000000cccccccccccccccccccccccccc, 0xcccccccccccccccccccccccccccccccd), // 10^-1
    u256::from_parts(0x00000080000000000000000000000000, 0x00000000000000000000000000000000), // 10^0
    u256::from_parts(0x000000a0000000000000000000000000, 0x00000000000000000000000000000000), // 10^1
    u256::from_parts(0x000000c8000000000000000000000000, 0x00000000000000000000000000000000), // 10^2
    u256::from_parts(0x000000fa000000000000000000000000, 0x00000000000000000000000000000000), // 10^3
    u256::from_parts(0x0000009c400000000000000000000000, 0x00000000000000000000000000000000), // 10^4
    u256::from_parts(0x000000c3500000000000000000000000, 0x00000000000000000000000000000000), // 10^5
    u256::from_parts(0x000000f4240000000000000000000000, 0x00000000000000000000000000000000), // 10^6
    u256::from_parts(0x00000098968000000000000000000000, 0x00000000000000000000000000000000), // 10^7
    u256::from_parts(0x000000bebc2000000000000000000000, 0x00000000000000000000000000000000), // 10^8
    u256::from_parts(0x000000ee6b2800000000000000000000, 0x00000000000000000000000000000000), // 10^9
    u256::from_parts(0x0000009502f900000000000000000000, 0x00000000000000000000000000000000), // 10^10
    u256::from_parts(0x000000ba43b740000000000000000000, 0x00000000000000000000000000000000), // 10^11
    u256::from_parts(0x000000e8d4a510000000000000000000, 0x00000000000000000000000000000000), // 10^12
    u256::from_parts(0x0000009184e72a000000000000000000, 0x00000000000000000000000000000000), // 10^13
    u256::from_parts(0x000000b5e620f4800000000000000000, 0x00000000000000000000000000000000), // 10^14
    u256::from_parts(0x000000e35fa931a00000000000000000, 0x00000000000000000000000000000000), // 10^15
    u256::from_parts(0x0000008e1bc9bf040000000000000000, 0x00000000000000000000000000000000), // 10^16
    u256::from_parts(0x000000b1a2bc2ec50000000000000000, 0x00000000000000000000000000000000), // 10^17
    u256::from_parts(0x000000de0b6b3a764000000000000000, 0x00000000000000000000000000000000), // 10^18
    u256::from_parts(0x0000008ac7230489e800000000000000, 0x00000000000000000000000000000000), // 10^19
    u256::from_parts(0x000000ad78ebc5ac6200000000000000, 0x00000000000000000000000000000000), // 10^20
    u256::from_parts(0x000000d8d726b7177a80000000000000, 0x00000000000000000000000000000000), // 10^21
    u256::from_parts(0x000000878678326eac90000000000000, 0x00000000000000000000000000000000), // 10^22
    u256::from_parts(0x000000a968163f0a57b4000000000000, 0x00000000000000000000000000000000), // 10^23
    u256::from_parts(0x000000d3c21bcecceda1000000000000, 0x00000000000000000000000000000000), // 10^24
    u256::from_parts(0x00000084595161401484a00000000000, 0x00000000000000000000000000000000), // 10^25
    u256::from_parts(0x000000a56fa5b99019a5c80000000000, 0x00000000000000000000000000000000), // 10^26
    u256::from_parts(0x000000cecb8f27f4200f3a0000000000, 0x00000000000000000000000000000000), // 10^27
    u256::from_parts(0x000000813f3978f89409844000000000, 0x00000000000000000000000000000000), // 10^28
    u256::from_parts(0x000000a18f07d736b90be55000000000, 0x00000000000000000000000000000000), // 10^29
    u256::from_parts(0x000000c9f2c9cd04674edea400000000, 0x00000000000000000000000000000000), // 10^30
    u256::from_parts(0x000000fc6f7c40458122964d00000000, 0x00000000000000000000000000000000), // 10^31
    u256::from_parts(0x0000009dc5ada82b70b59df020000000, 0x00000000000000000000000000000000), // 10^32
    u256::from_parts(0x000000c5371912364ce3056c28000000, 0x00000000000000000000000000000000), // 10^33
    u256::from_parts(0x000000f684df56c3e01bc6c732000000, 0x00000000000000000000000000000000), // 10^34
    u256::from_parts(0x0000009a130b963a6c115c3c7f400000, 0x00000000000000000000000000000000), // 10^35
    u256::from_parts(0x000000c097ce7bc90715b34b9f100000, 0x00000000000000000000000000000000), // 10^36
    u256::from_parts(0x000000f0bdc21abb48db201e86d40000, 0x00000000000000000000000000000000), // 10^37
    u256::from_parts(0x00000096769950b50d88f41314448000, 0x00000000000000000000000000000000), // 10^38
];

/// Reciprocal multipliers for the high binade.
///
/// Each entry is `ceil(10^e * 2^(342 - E))`, exactly half an ULP
/// above half of the corresponding [`MULTIPLIERS_LO`] entry.
#[rustfmt::skip]
pub(super) const MULTIPLIERS_HI: [u256; NUM_ENTRIES] = [
    u256::from_parts(0x0000004be2b05d35848cd2ee66c3cfe4, 0xb3ea0d010ed46378a9bad09d6abc40f4), // 10^-80
    u256::from_parts(0x0000005edb5c7482e5b007aa0074c3dd, 0xe0e4904152897c56d42984c4c56b5131), // 10^-79
    u256::from_parts(0x00000076923391a39f1c09948091f4d5, 0x591db451a72bdb6c8933e5f5f6c6257d), // 10^-78
    u256::from_parts(0x0000004a1b603b06437185fcd05b3905, 0x57b290b3087b6923d5c06fb9ba3bd76e), // 10^-77
    u256::from_parts(0x0000005ca23849c7d44de77c04720746, 0xad9f34dfca9a436ccb308ba828cacd4a), // 10^-76
    u256::from_parts(0x00000073cac65c39c961615b058e8918, 0x59070217bd40d447fdfcae9232fd809c), // 10^-75
    u256::from_parts(0x000000485ebbf9a41ddcdcd8e37915af, 0x37a4614ed64884acfebded1b5fde7062), // 10^-74
    u256::from_parts(0x0000005a766af80d2554140f1c575b1b, 0x058d79a28bdaa5d83e6d686237d60c7a), // 10^-73
    u256::from_parts(0x000000711405b6106ea91912e36d31e1, 0xc6f0d80b2ed14f4e4e08c27ac5cb8f99), // 10^-72
    u256::from_parts(0x00000046ac8391ca4529afabce243f2d, 0x1c568706fd42d190f0c5798cbb9f39c0), // 10^-71
    u256::from_parts(0x0000005857a4763cd6741b96c1ad4ef8, 0x636c28c8bc9385f52cf6d7efea87082f), // 10^-70
    u256::from_parts(0x0000006e6d8d93cc0c11227c7218a2b6, 0x7c4732faebb8677278348debe528ca3b), // 10^-69
    u256::from_parts(0x0000004504787c5f878ab58dc74f65b2, 0x0dac7fdcd35340a78b20d8b36f397e65), // 10^-68
    u256::from_parts(0x0000005645969b77696d62f139233f1e, 0x91179fd4082810d16de90ee04b07ddfe), // 10^-67
    u256::from_parts(0x0000006bd6fc425543c8bbad876c0ee6, 0x355d87c90a321505c96352985dc9d57e), // 10^-66
    u256::from_parts(0x00000043665da9754a5d754c74a3894f, 0xe15a74dda65f4d239dde139f3a9e256f), // 10^-65
    u256::from_parts(0x000000543ff513d29cf4d29f91cc6ba3, 0xd9b112150ff7206c855598870945aeca), // 10^-64
    u256::from_parts(0x000000694ff258c744320747763f868c, 0xd01d569a53f4e887a6aafea8cb971a7d), // 10^-63
    u256::from_parts(0x00000041d1f7777c8a9f448ca9e7b418, 0x0212562074791154c82adf297f3e708e), // 10^-62
    u256::from_parts(0x000000524675555bad4715afd461a11e, 0x0296eba8919755a9fa3596f3df0e0cb2), // 10^-61
    u256::from_parts(0x00000066d812aab29898db1bc97a0965, 0x833ca692b5fd2b1478c2fcb0d6d18fde), // 10^-60
    u256::from_parts(0x00000040470baaaf9f5f88f15dec45df, 0x7205e81bb1be3aeccb79ddee8642f9eb), // 10^-59
    u256::from_parts(0x0000005058ce955b87376b2db5675757, 0x4e8762229e2dc9a7fe58556a27d3b865), // 10^-58
    u256::from_parts(0x000000646f023ab2690545f922c12d2d, 0x22293aab45b93c11fdee6ac4b1c8a67f), // 10^-57
    u256::from_parts(0x0000007d8ac2c95f034697776b717878, 0x6ab3895617278b167d6a0575de3ad01e), // 10^-56
    u256::from_parts(0x0000004e76b9bddb620c1eaaa326eb4b, 0x42b035d5ce78b6ee0e624369aae4c213), // 10^-55
    u256::from_parts(0x0000006214682d523a8f26554bf0a61e, 0x135c434b4216e4a991fad444159df298), // 10^-54
    u256::from_parts(0x0000007a998238a6c932efea9eeccfa5, 0x9833541e129c9dd3f67989551b056f3d), // 10^-53
    u256::from_parts(0x0000004c9ff163683dbfd5f2a35401c7, 0x7f201492cba1e2a47a0bf5d530e36587), // 10^-52
    u256::from_parts(0x0000005fc7edbc424d2fcb6f4c290239, 0x5ee819b77e8a5b4d988ef34a7d1c3ee8), // 10^-51
    u256::from_parts(0x00000077b9e92b52e07bbe4b1f3342c7, 0xb6a220255e2cf220feb2b01d1c634ea2), // 10^-50
    u256::from_parts(0x0000004ad431bb13cc4d56eef38009bc, 0xd22554175adc17549f2fae1231be1125), // 10^-49
    u256::from_parts(0x0000005d893e29d8bf60acaab0600c2c, 0x06aea91d31931d29c6fb9996be2d956f), // 10^-48
    u256::from_parts(0x00000074eb8db44eef38d7d55c780f37, 0x085a53647df7e47438ba7ffc6db8faca), // 10^-47
    u256::from_parts(0x00000049133890b1558386e559cb0982, 0x6538741ecebaeec8a3748ffdc4939cbf), // 10^-46
    u256::from_parts(0x0000005b5806b4ddaae4689eb03dcbe2, 0xfe8691268269aa7acc51b3fd35b883ee), // 10^-45
    u256::from_parts(0x000000722e086215159d82c65c4d3edb, 0xbe283570230415197f6620fc8326a4ea), // 10^-44
    u256::from_parts(0x000000475cc53d4d2d8271bbf9b04749, 0x56d9216615e28d2fef9fd49dd1f82712), // 10^-43
    u256::from_parts(0x0000005933f68ca078e30e2af81c591b, 0xac8f69bf9b5b307beb87c9c5467630d7), // 10^-42
    u256::from_parts(0x0000006f80f42fc8971bd1b5b6236f62, 0x97b3442f8231fc9ae669bc369813bd0c), // 10^-41
    u256::from_parts(0x00000045b0989ddd5e71631191d6259d, 0x9ed00a9db15f3de0d00215a21f0c5628), // 10^-40
    u256::from_parts(0x000000571cbec554b60dbbd5f64baf05, 0x06840d451db70d5904029b0aa6cf6bb2), // 10^-39
    u256::from_parts(0x0000006ce3ee76a9e3912acb73de9ac6, 0x482510966524d0af450341cd5083469e), // 10^-38
    u256::from_parts(0x000000440e750a2a2e3ababf286b20bb, 0xed172a5dff37026d8b22092052520c23), // 10^-37
    u256::from_parts(0x0000005512124cb4b9c9696ef285e8ea, 0xe85cf4f57f04c308edea8b6866e68f2b), // 10^-36
    u256::from_parts(0x0000006a5696dfe1e83bc3caaf276325, 0xa2743232dec5f3cb29652e4280a032f6), // 10^-35
    u256::from_parts(0x00000042761e4bed31255a5ead789df7, 0x85889f5fcb3bb85ef9df3ce990641fda), // 10^-34
    u256::from_parts(0x0000005313a5dee87d6eb0f658d6c575, 0x66eac737be0aa676b8570c23f47d27d0), // 10^-33
    u256::from_parts(0x00000067d88f56a29cca5d33ef0c76d2, 0xc0a57905ad8d5014666ccf2cf19c71c4), // 10^-32
    u256::from_parts(0x00000040e7599625a1fe7a407567ca43, 0xb8676ba38c78520cc004017c1701c71b), // 10^-31
    u256::from_parts(0x00000051212ffbaf0a7e18d092c1bcd4, 0xa681468c6f96668ff00501db1cc238e1), // 10^-30
    u256::from_parts(0x00000065697bfa9acd1d9f04b7722c09, 0xd021982f8b7c0033ec064251e3f2c71a), // 10^-29
    u256::from_parts(0x0000007ec3daf941806506c5e54eb70c, 0x4429fe3b6e5b0040e707d2e65cef78e0), // 10^-28
    u256::from_parts(0x0000004f3a68dbc8f03f243baf513267, 0xaa9a3ee524f8e0289064e3cffa15ab8c), // 10^-27
    u256::from_parts(0x00000063090312bb2c4eed4a9b257f01, 0x9540ce9e6e371832b47e1cc3f89b166f), // 10^-26
    u256::from_parts(0x0000007bcb43d769f762a89d41eedec1, 0xfa91024609c4de3f619da3f4f6c1dc0b), // 10^-25
    u256::from_parts(0x0000004d5f0a66a23a9da96249354b39, 0x3c9aa16bc61b0ae79d0286791a392987), // 10^-24
    u256::from_parts(0x00000060b6cd004ac94513badb829e07, 0x8bc149c6b7a1cda18443281760c773e9), // 10^-23
    u256::from_parts(0x00000078e480405d7b9658a992634589, 0x6eb19c38658a4109e553f21d38f950e3), // 10^-22
    u256::from_parts(0x0000004b8ed0283a6d3df769fb7e0b75, 0xe52f01a33f7668a62f547752439bd28e), // 10^-21
    u256::from_parts(0x0000005e72843249088d75447a5d8e53, 0x5e7ac20c0f5402cfbb299526d482c731), // 10^-20
    u256::from_parts(0x000000760f253edb4ab0d29598f4f1e8, 0x3619728f13290383a9f3fa7089a378fd), // 10^-19
    u256::from_parts(0x00000049c97747490eae839d7f991731, 0x21cfe7996bf9a2324a387c8656062b9e), // 10^-18
    u256::from_parts(0x0000005c3bd5191b525a2484df7f5cfd, 0x6a43e17fc6f80abedcc69ba7eb87b686), // 10^-17
    u256::from_parts(0x000000734aca5f6226f0ada6175f343c, 0xc4d4d9dfb8b60d6e93f84291e669a427), // 10^-16
    u256::from_parts(0x000000480ebe7b9d58566c87ce9b80a5, 0xfb05082bd371c8651c7b299b30020699), // 10^-15
    u256::from_parts(0x0000005a126e1a84ae6c07a9c24260cf, 0x79c64a36c84e3a7e6399f401fc02883f), // 10^-14
    u256::from_parts(0x000000709709a125da07099432d2f903, 0x5837dcc47a61c91dfc8071027b032a4e), // 10^-13
    u256::from_parts(0x000000465e6604b7a84465fc9fc3dba2, 0x1722e9facc7d1db2bdd046a18ce1fa71), // 10^-12
    u256::from_parts(0x00000057f5ff85e592557f7bc7b4d28a, 0x9ceba4797f9c651f6d445849f01a790d), // 10^-11
    u256::from_parts(0x0000006df37f675ef6eadf5ab9a2072d, 0x44268d97df837e6748956e5c6c211751), // 10^-10
    u256::from_parts(0x00000044b82fa09b5a52cb98b405447c, 0x4a98187eebb22f008d5d64f9c394ae93), // 10^-9
    u256::from_parts(0x00000055e63b88c230e77e7ee106959b, 0x5d3e1e9ea69ebac0b0b4be383479da37), // 10^-8
    u256::from_parts(0x0000006b5fca6af2bd215e1e99483b02, 0x348da64650466970dce1edc6419850c5), // 10^-7
    u256::from_parts(0x000000431bde82d7b634dad31fcd24e1, 0x60d887ebf22c01e68a0d349be8ff327b), // 10^-6
    u256::from_parts(0x00000053e2d6238da3c21187e7c06e19, 0xb90ea9e6eeb702602c9081c2e33eff1a), // 10^-5
    u256::from_parts(0x00000068db8bac710cb295e9e1b089a0, 0x27525460aa64c2f837b4a2339c0ebee0), // 10^-4
    u256::from_parts(0x0000004189374bc6a7ef9db22d0e5604, 0x189374bc6a7ef9db22d0e5604189374c), // 10^-3
    u256::from_parts(0x00000051eb851eb851eb851eb851eb85, 0x1eb851eb851eb851eb851eb851eb851f), // 10^-2
    u256::from_parts(0x00000066666666666666666666666666, 0x66666666666666666666666666666667), // 10^-1
    u256::from_parts(0x00000040000000000000000000000000, 0x00000000000000000000000000000000), // 10^0
    u256::from_parts(0x00000050000000000000000000000000, 0x00000000000000000000000000000000), // 10^1
    u256::from_parts(0x00000064000000000000000000000000, 0x00000000000000000000000000000000), // 10^2
    u256::from_parts(0x0000007d000000000000000000000000, 0x00000000000000000000000000000000), // 10^3
    u256::from_parts(0x0000004e200000000000000000000000, 0x00000000000000000000000000000000), // 10^4
    u256::from_parts(0x00000061a80000000000000000000000, 0x00000000000000000000000000000000), // 10^5
    u256::from_parts(0x0000007a120000000000000000000000, 0x00000000000000000000000000000000), // 10^6
    u256::from_parts(0x0000004c4b4000000000000000000000, 0x00000000000000000000000000000000), // 10^7
    u256::from_parts(0x0000005f5e1000000000000000000000, 0x00000000000000000000000000000000), // 10^8
    u256::from_parts(0x00000077359400000000000000000000, 0x00000000000000000000000000000000), // 10^9
    u256::from_parts(0x0000004a817c80000000000000000000, 0x00000000000000000000000000000000), // 10^10
    u256::from_parts(0x0000005d21dba0000000000000000000, 0x00000000000000000000000000000000), // 10^11
    u256::from_parts(0x000000746a5288000000000000000000, 0x00000000000000000000000000000000), // 10^12
    u256::from_parts(0x00000048c27395000000000000000000, 0x00000000000000000000000000000000), // 10^13
    u256::from_parts(0x0000005af3107a400000000000000000, 0x00000000000000000000000000000000), // 10^14
    u256::from_parts(0x00000071afd498d00000000000000000, 0x00000000000000000000000000000000), // 10^15
    u256::from_parts(0x000000470de4df820000000000000000, 0x00000000000000000000000000000000), // 10^16
    u256::from_parts(0x00000058d15e17628000000000000000, 0x00000000000000000000000000000000), // 10^17
    u256::from_parts(0x0000006f05b59d3b2000000000000000, 0x00000000000000000000000000000000), // 10^18
    u256::from_parts(0x0000004563918244f400000000000000, 0x00000000000000000000000000000000), // 10^19
    u256::from_parts(0x00000056bc75e2d63100000000000000, 0x00000000000000000000000000000000), // 10^20
    u256::from_parts(0x0000006c6b935b8bbd40000000000000, 0x00000000000000000000000000000000), // 10^21
    u256::from_parts(0x00000043c33c19375648000000000000, 0x00000000000000000000000000000000), // 10^22
    u256::from_parts(0x00000054b40b1f852bda000000000000, 0x00000000000000000000000000000000), // 10^23
    u256::from_parts(0x00000069e10de76676d0800000000000, 0x00000000000000000000000000000000), // 10^24
    u256::from_parts(0x000000422ca8b0a00a42500000000000, 0x00000000000000000000000000000000), // 10^25
    u256::from_parts(0x00000052b7d2dcc80cd2e40000000000, 0x00000000000000000000000000000000), // 10^26
    u256::from_parts(0x0000006765c793fa10079d0000000000, 0x00000000000000000000000000000000), // 10^27
    u256::from_parts(0x000000409f9cbc7c4a04c22000000000, 0x00000000000000000000000000000000), // 10^28
    u256::from_parts(0x00000050c783eb9b5c85f2a800000000, 0x00000000000000000000000000000000), // 10^29
    u256::from_parts(0x00000064f964e68233a76f5200000000, 0x00000000000000000000000000000000), // 10^30
    u256::from_parts(0x0000007e37be2022c0914b2680000000, 0x00000000000000000000000000000000), // 10^31
    u256::from_parts(0x0000004ee2d6d415b85acef810000000, 0x00000000000000000000000000000000), // 10^32
    u256::from_parts(0x000000629b8c891b267182b614000000, 0x00000000000000000000000000000000), // 10^33
    u256::from_parts(0x0000007b426fab61f00de36399000000, 0x00000000000000000000000000000000), // 10^34
    u256::from_parts(0x0000004d0985cb1d3608ae1e3fa00000, 0x00000000000000000000000000000000), // 10^35
    u256::from_parts(0x000000604be73de4838ad9a5cf880000, 0x00000000000000000000000000000000), // 10^36
    u256::from_parts(0x000000785ee10d5da46d900f436a0000, 0x00000000000000000000000000000000), // 10^37
    u256::from_parts(0x0000004b3b4ca85a86c47a098a224000, 0x00000000000000000000000000000000), // 10^38
];

/// Round decision boundaries.
///
/// Indexed by `(mode << 2) | (sign << 1) | (significand & 1)`.
/// Each entry is the largest 128-bit round/sticky value that
/// does *not* round the provisional significand up. Ties-to-even
/// is encoded per parity: an even significand holds at exactly
/// one half ULP, an odd one rounds up to even.
pub(super) const ROUND_BOUNDS: [u128; 20] = {
    const HALF: u128 = 1 << 127;

    let mut t = [0u128; 20];
    let mut i = 0;
    while i < t.len() {
        let mode = i >> 2;
        let neg = (i >> 1) & 1 == 1;
        let odd = i & 1 == 1;
        t[i] = match mode {
            // roundTiesToEven
            0 => {
                if odd {
                    HALF - 1
                } else {
                    HALF
                }
            }
            // roundTowardNegative: round a negative magnitude up
            // on any remainder, never a positive one.
            1 => {
                if neg {
                    0
                } else {
                    u128::MAX
                }
            }
            // roundTowardPositive
            2 => {
                if neg {
                    u128::MAX
                } else {
                    0
                }
            }
            // roundTowardZero
            3 => u128::MAX,
            // roundTiesToAway
            _ => HALF - 1,
        };
        i += 1;
    }
    t
};
