//! Male front view.

use crate::types::{BodyPartSlug, Gender, Side};

use super::{AssetTable, BodyPartAsset};

pub static MALE_FRONT: AssetTable = AssetTable {
    gender: Gender::Male,
    side: Side::Front,
    view_box: "0 0 200 400",
    outline: &["M 100 7.7 L 90 11.2 L 84 21.7 L 85 49.8 L 91 66.2 L 90 77.9 L 76 84.9 L 63 91.9 L 58 117.6 L 57 152.7 L 52 197.2 L 50 222.9 L 58 232.3 L 66 227.6 L 68 201.9 L 74 159.8 L 77 176.1 L 78 194.9 L 76 260.4 L 79 290.8 L 80 342.3 L 83 370.4 L 78 389.1 L 99 389.1 L 99 253.4 L 100 251 L 101 253.4 L 101 389.1 L 122 389.1 L 117 370.4 L 120 342.3 L 121 290.8 L 124 260.4 L 122 194.9 L 123 176.1 L 126 159.8 L 132 201.9 L 134 227.6 L 142 232.3 L 150 222.9 L 148 197.2 L 143 152.7 L 142 117.6 L 137 91.9 L 124 84.9 L 110 77.9 L 109 66.2 L 115 49.8 L 116 21.7 L 110 11.2 Z"],
    parts: &[
        BodyPartAsset {
            slug: BodyPartSlug::Hair,
            path_data: &[
                "M 86 21.7 L 92 12.3 L 100 10 L 108 12.3 L 114 21.7 L 112 28.7 L 100 24 L 88 28.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Head,
            path_data: &[
                "M 88 28.7 L 100 24 L 112 28.7 L 113 47.4 L 108 61.5 L 100 66.2 L 92 61.5 L 87 47.4 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Neck,
            path_data: &[
                "M 93 66.2 L 107 66.2 L 109 82.5 L 91 82.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTrapezius,
            path_data: &[
                "M 109 77.9 L 120 87.2 L 107 87.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTrapezius,
            path_data: &[
                "M 91 77.9 L 80 87.2 L 93 87.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftDeltoids,
            path_data: &[
                "M 122 87.2 L 134 94.2 L 138 117.6 L 128 115.3 L 120 96.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightDeltoids,
            path_data: &[
                "M 78 87.2 L 66 94.2 L 62 117.6 L 72 115.3 L 80 96.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftChest,
            path_data: &[
                "M 118 91.9 L 101 91.9 L 101 127 L 114 129.3 L 122 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightChest,
            path_data: &[
                "M 82 91.9 L 99 91.9 L 99 127 L 86 129.3 L 78 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftBiceps,
            path_data: &[
                "M 138 120 L 127 117.6 L 128 150.4 L 140 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightBiceps,
            path_data: &[
                "M 62 120 L 73 117.6 L 72 150.4 L 60 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftForearm,
            path_data: &[
                "M 141 157.4 L 134 157.4 L 140 199.5 L 146 197.2 Z",
                "M 134 157.4 L 128 155.1 L 134 199.5 L 140 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightForearm,
            path_data: &[
                "M 59 157.4 L 66 157.4 L 60 199.5 L 54 197.2 Z",
                "M 66 157.4 L 72 155.1 L 66 199.5 L 60 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHands,
            path_data: &[
                "M 147 201.9 L 134 201.9 L 134 225.3 L 142 230 L 148 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHands,
            path_data: &[
                "M 53 201.9 L 66 201.9 L 66 225.3 L 58 230 L 52 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftObliques,
            path_data: &[
                "M 121 124.7 L 114 131.7 L 114 173.8 L 119 176.1 L 122 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightObliques,
            path_data: &[
                "M 79 124.7 L 86 131.7 L 86 173.8 L 81 176.1 L 78 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Abs,
            path_data: &[
                "M 88 131.7 L 99 131.7 L 99 145.7 L 88 145.7 Z",
                "M 101 131.7 L 112 131.7 L 112 145.7 L 101 145.7 Z",
                "M 88 148.1 L 99 148.1 L 99 162.1 L 88 162.1 Z",
                "M 101 148.1 L 112 148.1 L 112 162.1 L 101 162.1 Z",
                "M 88 164.4 L 99 164.4 L 99 178.5 L 88 178.5 Z",
                "M 101 164.4 L 112 164.4 L 112 178.5 L 101 178.5 Z",
                "M 88 180.8 L 112 180.8 L 100 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAdductors,
            path_data: &[
                "M 108 199.5 L 101 206.6 L 101 244 L 106 248.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAdductors,
            path_data: &[
                "M 92 199.5 L 99 206.6 L 99 244 L 94 248.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftQuadriceps,
            path_data: &[
                "M 120 192.5 L 108 197.2 L 106 251 L 114 260.4 Z",
                "M 123 201.9 L 120 192.5 L 114 260.4 L 120 258 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightQuadriceps,
            path_data: &[
                "M 80 192.5 L 92 197.2 L 94 251 L 86 260.4 Z",
                "M 77 201.9 L 80 192.5 L 86 260.4 L 80 258 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftKnees,
            path_data: &[
                "M 119 265.1 L 105 265.1 L 105 283.8 L 119 283.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightKnees,
            path_data: &[
                "M 81 265.1 L 95 265.1 L 95 283.8 L 81 283.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTibialis,
            path_data: &[
                "M 114 290.8 L 107 290.8 L 109 351.6 L 112 351.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTibialis,
            path_data: &[
                "M 86 290.8 L 93 290.8 L 91 351.6 L 88 351.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftCalves,
            path_data: &[
                "M 120 290.8 L 114 290.8 L 112 351.6 L 118 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightCalves,
            path_data: &[
                "M 80 290.8 L 86 290.8 L 88 351.6 L 82 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAnkles,
            path_data: &[
                "M 116 356.3 L 106 356.3 L 106 368 L 116 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAnkles,
            path_data: &[
                "M 84 356.3 L 94 356.3 L 94 368 L 84 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftFeet,
            path_data: &[
                "M 118 370.4 L 104 370.4 L 102 386.7 L 120 386.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightFeet,
            path_data: &[
                "M 82 370.4 L 96 370.4 L 98 386.7 L 80 386.7 Z",
            ],
        },
    ],
};
