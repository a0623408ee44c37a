//! Insertion sequences with their exact expected prefix serialization.

/// Keys inserted in order into an empty tree, and the resulting prefix string.
#[derive(Debug, Clone, Copy)]
pub struct InsertionScenario {
    pub name: &'static str,
    pub keys: &'static [i64],
    pub prefix: &'static str,
}

/// All three serializations of one tree.
#[derive(Debug, Clone, Copy)]
pub struct TraversalScenario {
    pub keys: &'static [i64],
    pub infix: &'static str,
    pub prefix: &'static str,
    pub postfix: &'static str,
}

const fn scenario(
    name: &'static str,
    keys: &'static [i64],
    prefix: &'static str,
) -> InsertionScenario {
    InsertionScenario { name, keys, prefix }
}

pub const INSERTION_SCENARIOS: &[InsertionScenario] = &[
    // first and second node
    scenario("root", &[30], " B30 "),
    scenario("second_left", &[30, 15], " B30  R15 "),
    scenario("second_right", &[30, 45], " B30  R45 "),
    // third node
    scenario("left_left", &[30, 15, 10], " B15  R10  R30 "),
    scenario("left_right", &[30, 15, 25], " B25  R15  R30 "),
    scenario("balanced", &[30, 15, 45], " B30  R15  R45 "),
    scenario("left_right_alt", &[32, 20, 28], " B28  R20  R32 "),
    scenario("right_right", &[42, 420, 4200], " B420  R42  R4200 "),
    scenario("left_left_descending", &[12, 10, 8], " B10  R8  R12 "),
    // fourth node
    scenario("fourth_after_left_left", &[30, 15, 10, 13], " B15  B10  R13  B30 "),
    scenario("fourth_after_left_right", &[30, 15, 25, 29], " B25  B15  B30  R29 "),
    scenario("fourth_after_balanced", &[30, 15, 45, 69], " B30  B15  B45  R69 "),
    scenario("fourth_after_left_right_alt", &[32, 20, 28, 21], " B28  B20  R21  B32 "),
    scenario("fourth_after_right_right", &[42, 420, 4200, 86], " B420  B42  R86  B4200 "),
    scenario("fourth_recolor_only", &[15, 13, 20, 12], " B15  B13  R12  B20 "),
    // fifth node
    scenario("fifth_recolor_only", &[30, 15, 45, 10, 25], " B30  B15  R10  R25  B45 "),
    scenario("fifth_left_right", &[30, 15, 10, 7, 9], " B15  B9  R7  R10  B30 "),
    scenario("fifth_right_right", &[30, 15, 25, 32, 38], " B25  B15  B32  R30  R38 "),
    scenario("fifth_right_right_alt", &[30, 15, 45, 60, 80], " B30  B15  B60  R45  R80 "),
    scenario("fifth_right_left", &[32, 20, 28, 26, 24], " B28  B24  R20  R26  B32 "),
    scenario("fifth_right_right_deep", &[42, 420, 4200, 86, 101], " B420  B86  R42  R101  B4200 "),
];

pub const TO_STRINGS_SCENARIO: TraversalScenario = TraversalScenario {
    keys: &[12, 11, 15, 5, 13, 7],
    infix: " R5  B7  R11  B12  R13  B15 ",
    prefix: " B12  B7  R5  R11  B15  R13 ",
    postfix: " R5  R11  B7  R13  B15  B12 ",
};

/// Larger tree used for membership lookups.
pub const SEARCH_SCENARIO: InsertionScenario = scenario(
    "search",
    &[19, 39, 9, 8, 3, 4, 2, 92, 88, 47, 36, 99, 103, 2222, 2234, 233, 938],
    " B19  B8  B3  R2  R4  B9  B99  R88  B39  R36  R47  B92  R2222  B233  R103  R938  B2234 ",
);

/// The copy fixture; 200 is inserted into the source after copying.
pub const COPY_SCENARIO: InsertionScenario =
    scenario("copy", &[11, 23, 9, 52, 31, 4], " B11  B9  R4  B31  R23  R52 ");
