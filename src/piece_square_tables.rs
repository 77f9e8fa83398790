// Packed piece-square data and its one-time decode
//
// The evaluation constants ship as 99 packed 64-bit words: 384 bytes of
// midgame piece-square values, 384 bytes of endgame values, then the phase
// weights and per-piece material adjustments. The packing is purely a
// storage format; everything downstream works with the decoded tables.

use once_cell::sync::Lazy;

/// Game phase of a full set of non-pawn material (2R+2N+2B+Q per side).
pub const PHASE_MAX: i32 = 24;

#[rustfmt::skip]
const PACKED: [u64; 99] = [
    2531906049332683555, 1748981496244382085, 1097852895337720349, 879379754340921365,
    733287618436800776, 1676506906360749833, 957361353080644096, 2531906049332683555,
    1400370699429487872, 7891921272903718197, 12306085787436563023, 10705271422119415669,
    8544333011004326513, 7968995920879187303, 7741846628066281825, 7452158230270339349,
    5357357457767159349, 2550318802336244280, 5798248685363885890, 5789790151167530830,
    6222952639246589772, 6657566409878495570, 6013263560801673558, 4407693923506736945,
    8243364706457710951, 8314078770487191394, 6306293301333023298, 3692787177354050607,
    3480508800547106083, 2756844305966902810, 18386335130924827, 3252248017965169204,
    6871752429727068694, 7516062622759586586, 7737582523311005989, 3688521973121554199,
    3401675877915367465, 3981239439281566756, 3688238338080057871, 5375663681380401,
    5639385282757351424, 2601740525735067742, 3123043126030326072, 2104069582342139184,
    1017836687573008400, 2752300895699678003, 5281087483624900674, 5717642197576017202,
    578721382704613384, 14100080608108000698, 6654698745744944230, 1808489945494790184,
    507499387321389333, 1973657882726156, 74881230395412501, 578721382704613384,
    10212557253393705, 3407899295075687242, 4201957831109070667, 5866904407588300370,
    5865785079031356753, 5570777287267344460, 3984647049929379641, 2535897457754910790,
    219007409309353485, 943238143453304595, 2241421631242834717, 2098155335031661592,
    1303832920857255445, 870353785759930383, 3397624511334669, 726780562173596164,
    1809356472696839713, 1665231324524388639, 1229220018493528859, 1590638277979871000,
    651911504053672215, 291616928119591952, 1227524515678129678, 6763160767239691,
    4554615069702439202, 3119099418927382298, 3764532488529260823, 5720789117110010158,
    4778967136330467097, 3473748882448060443, 794625965904696341, 150601370378243850,
    4129336036406339328, 6152322103641660222, 6302355975661771604, 5576700317533364290,
    4563097935526446648, 4706642459836630839, 4126790774883761967, 2247925333337909269,
    17213489408, 6352120424995714304, 982348882,
];

/// Decoded, immutable evaluation tables.
///
/// Indexed `[piece][square]` with the square taken from the reference
/// orientation; the evaluator mirrors squares for the side moving "up".
pub struct EvalTables {
    pub midgame: [[i32; 64]; 6],
    pub endgame: [[i32; 64]; 6],
    /// Per-piece contribution to the game phase (pawn and king carry none).
    pub phase: [i32; 6],
    pub midgame_material: [i32; 6],
    pub endgame_material: [i32; 6],
}

pub static EVAL_TABLES: Lazy<EvalTables> = Lazy::new(EvalTables::decode);

impl EvalTables {
    fn decode() -> Self {
        let mut bytes = [0u8; 99 * 8];
        for (i, word) in PACKED.iter().enumerate() {
            bytes[i * 8..i * 8 + 8].copy_from_slice(&word.to_le_bytes());
        }

        let mut tables = EvalTables {
            midgame: [[0; 64]; 6],
            endgame: [[0; 64]; 6],
            phase: [0; 6],
            midgame_material: [0; 6],
            endgame_material: [0; 6],
        };

        // 6 byte-sized entries per square, midgame block first.
        for square in 0..64 {
            for piece in 0..6 {
                tables.midgame[piece][square] = bytes[square * 6 + piece] as i32;
                tables.endgame[piece][square] = bytes[384 + square * 6 + piece] as i32;
            }
        }

        // Material is a doubling base per piece kind plus a packed adjustment
        // byte for each phase.
        for piece in 0..6 {
            tables.phase[piece] = bytes[768 + piece] as i32;
            tables.midgame_material[piece] = (47 << piece) + bytes[776 + piece] as i32;
            tables.endgame_material[piece] = (47 << piece) + bytes[782 + piece] as i32;
        }

        tables
    }
}
