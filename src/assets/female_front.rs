//! Female front view.

use crate::types::{BodyPartSlug, Gender, Side};

use super::{AssetTable, BodyPartAsset};

pub static FEMALE_FRONT: AssetTable = AssetTable {
    gender: Gender::Female,
    side: Side::Front,
    view_box: "0 0 200 400",
    outline: &["M 100 7.7 L 91 11.2 L 85.6 21.7 L 86.5 49.8 L 91.9 66.2 L 91 77.9 L 78.4 84.9 L 66.7 91.9 L 62.2 117.6 L 61.3 152.7 L 56.8 197.2 L 51 222.9 L 57.5 232.3 L 66.1 227.6 L 70.9 201.9 L 76.6 159.8 L 79.3 176.1 L 80.2 194.9 L 74.6 260.4 L 77.7 290.8 L 78.9 342.3 L 82.9 370.4 L 78 389.1 L 99 389.1 L 98.9 253.4 L 100 251 L 101.1 253.4 L 101 389.1 L 122 389.1 L 117.1 370.4 L 121.1 342.3 L 122.3 290.8 L 125.4 260.4 L 119.8 194.9 L 120.7 176.1 L 123.4 159.8 L 129.1 201.9 L 133.9 227.6 L 142.5 232.3 L 149 222.9 L 143.2 197.2 L 138.7 152.7 L 137.8 117.6 L 133.3 91.9 L 121.6 84.9 L 109 77.9 L 108.1 66.2 L 113.5 49.8 L 114.4 21.7 L 109 11.2 Z"],
    parts: &[
        BodyPartAsset {
            slug: BodyPartSlug::Hair,
            path_data: &[
                "M 87.4 21.7 L 92.8 12.3 L 100 10 L 107.2 12.3 L 112.6 21.7 L 110.8 28.7 L 100 24 L 89.2 28.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Head,
            path_data: &[
                "M 89.2 28.7 L 100 24 L 110.8 28.7 L 111.7 47.4 L 107.2 61.5 L 100 66.2 L 92.8 61.5 L 88.3 47.4 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Neck,
            path_data: &[
                "M 93.7 66.2 L 106.3 66.2 L 108.1 82.5 L 91.9 82.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTrapezius,
            path_data: &[
                "M 108.1 77.9 L 118 87.2 L 106.3 87.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTrapezius,
            path_data: &[
                "M 91.9 77.9 L 82 87.2 L 93.7 87.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftDeltoids,
            path_data: &[
                "M 119.8 87.2 L 130.6 94.2 L 134.2 117.6 L 125.2 115.3 L 118 96.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightDeltoids,
            path_data: &[
                "M 80.2 87.2 L 69.4 94.2 L 65.8 117.6 L 74.8 115.3 L 82 96.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftChest,
            path_data: &[
                "M 116.2 91.9 L 100.9 91.9 L 100.9 127 L 112.6 129.3 L 119.8 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightChest,
            path_data: &[
                "M 83.8 91.9 L 99.1 91.9 L 99.1 127 L 87.4 129.3 L 80.2 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftBiceps,
            path_data: &[
                "M 134.2 120 L 124.3 117.6 L 125.2 150.4 L 136 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightBiceps,
            path_data: &[
                "M 65.8 120 L 75.7 117.6 L 74.8 150.4 L 64 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftForearm,
            path_data: &[
                "M 136.9 157.4 L 130.6 157.4 L 136 199.5 L 141.4 197.2 Z",
                "M 130.6 157.4 L 125.2 155.1 L 130.6 199.5 L 136 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightForearm,
            path_data: &[
                "M 63.1 157.4 L 69.4 157.4 L 64 199.5 L 58.6 197.2 Z",
                "M 69.4 157.4 L 74.8 155.1 L 69.4 199.5 L 64 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHands,
            path_data: &[
                "M 142.7 201.9 L 130.9 201.9 L 133.6 225.3 L 142.2 230 L 146.7 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHands,
            path_data: &[
                "M 57.3 201.9 L 69.1 201.9 L 66.4 225.3 L 57.8 230 L 53.3 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftObliques,
            path_data: &[
                "M 118.9 124.7 L 112.6 131.7 L 112.6 173.8 L 117.1 176.1 L 119.8 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightObliques,
            path_data: &[
                "M 81.1 124.7 L 87.4 131.7 L 87.4 173.8 L 82.9 176.1 L 80.2 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Abs,
            path_data: &[
                "M 89.2 131.7 L 99.1 131.7 L 99.1 145.7 L 89.2 145.7 Z",
                "M 100.9 131.7 L 110.8 131.7 L 110.8 145.7 L 100.9 145.7 Z",
                "M 89.2 148.1 L 99.1 148.1 L 99.1 162.1 L 89.2 162.1 Z",
                "M 100.9 148.1 L 110.8 148.1 L 110.8 162.1 L 100.9 162.1 Z",
                "M 89.2 164.4 L 99.1 164.4 L 99.1 178.5 L 89.2 178.5 Z",
                "M 100.9 164.4 L 110.8 164.4 L 110.8 178.5 L 100.9 178.5 Z",
                "M 89.2 180.8 L 110.8 180.8 L 100 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAdductors,
            path_data: &[
                "M 107.2 199.5 L 100.9 206.6 L 101.1 244 L 106.4 248.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAdductors,
            path_data: &[
                "M 92.8 199.5 L 99.1 206.6 L 98.9 244 L 93.6 248.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftQuadriceps,
            path_data: &[
                "M 118 192.5 L 107.2 197.2 L 106.4 251 L 114.8 260.4 Z",
                "M 120.9 201.9 L 118 192.5 L 114.8 260.4 L 121.2 258 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightQuadriceps,
            path_data: &[
                "M 82 192.5 L 92.8 197.2 L 93.6 251 L 85.2 260.4 Z",
                "M 79.1 201.9 L 82 192.5 L 85.2 260.4 L 78.8 258 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftKnees,
            path_data: &[
                "M 120.1 265.1 L 105.3 265.1 L 105.3 283.8 L 120.1 283.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightKnees,
            path_data: &[
                "M 79.9 265.1 L 94.7 265.1 L 94.7 283.8 L 79.9 283.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTibialis,
            path_data: &[
                "M 114.8 290.8 L 107.4 290.8 L 109.4 351.6 L 112.5 351.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTibialis,
            path_data: &[
                "M 85.2 290.8 L 92.6 290.8 L 90.6 351.6 L 87.5 351.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftCalves,
            path_data: &[
                "M 121.2 290.8 L 114.8 290.8 L 112.5 351.6 L 119.1 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightCalves,
            path_data: &[
                "M 78.8 290.8 L 85.2 290.8 L 87.5 351.6 L 80.9 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAnkles,
            path_data: &[
                "M 116.5 356.3 L 106.2 356.3 L 106.1 368 L 116.2 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAnkles,
            path_data: &[
                "M 83.5 356.3 L 93.8 356.3 L 93.9 368 L 83.8 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftFeet,
            path_data: &[
                "M 118.1 370.4 L 104 370.4 L 102 386.7 L 120 386.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightFeet,
            path_data: &[
                "M 81.9 370.4 L 96 370.4 L 98 386.7 L 80 386.7 Z",
            ],
        },
    ],
};
