//! Female back view.

use crate::types::{BodyPartSlug, Gender, Side};

use super::{AssetTable, BodyPartAsset};

pub static FEMALE_BACK: AssetTable = AssetTable {
    gender: Gender::Female,
    side: Side::Back,
    view_box: "200 0 200 400",
    outline: &["M 300 7.7 L 291 11.2 L 285.6 21.7 L 286.5 49.8 L 291.9 66.2 L 291 77.9 L 278.4 84.9 L 266.7 91.9 L 262.2 117.6 L 261.3 152.7 L 256.8 197.2 L 251 222.9 L 257.5 232.3 L 266.1 227.6 L 270.9 201.9 L 276.6 159.8 L 279.3 176.1 L 280.2 194.9 L 274.6 260.4 L 277.7 290.8 L 278.9 342.3 L 282.9 370.4 L 278 389.1 L 299 389.1 L 298.9 253.4 L 300 251 L 301.1 253.4 L 301 389.1 L 322 389.1 L 317.1 370.4 L 321.1 342.3 L 322.3 290.8 L 325.4 260.4 L 319.8 194.9 L 320.7 176.1 L 323.4 159.8 L 329.1 201.9 L 333.9 227.6 L 342.5 232.3 L 349 222.9 L 343.2 197.2 L 338.7 152.7 L 337.8 117.6 L 333.3 91.9 L 321.6 84.9 L 309 77.9 L 308.1 66.2 L 313.5 49.8 L 314.4 21.7 L 309 11.2 Z"],
    parts: &[
        BodyPartAsset {
            slug: BodyPartSlug::Hair,
            path_data: &[
                "M 287.4 21.7 L 292.8 12.3 L 300 10 L 307.2 12.3 L 312.6 21.7 L 312.6 42.8 L 300 35.7 L 287.4 42.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Head,
            path_data: &[
                "M 287.4 42.8 L 300 35.7 L 312.6 42.8 L 310.8 56.8 L 300 63.8 L 289.2 56.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftNeck,
            path_data: &[
                "M 292.8 63.8 L 299.1 63.8 L 299.1 80.2 L 291 80.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightNeck,
            path_data: &[
                "M 307.2 63.8 L 300.9 63.8 L 300.9 80.2 L 309 80.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTrapezius,
            path_data: &[
                "M 299.1 73.2 L 291 80.2 L 280.2 89.6 L 299.1 122.3 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTrapezius,
            path_data: &[
                "M 300.9 73.2 L 309 80.2 L 319.8 89.6 L 300.9 122.3 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftDeltoids,
            path_data: &[
                "M 280.2 89.6 L 269.4 94.2 L 265.8 117.6 L 274.8 115.3 L 282 98.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightDeltoids,
            path_data: &[
                "M 319.8 89.6 L 330.6 94.2 L 334.2 117.6 L 325.2 115.3 L 318 98.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftUpperBack,
            path_data: &[
                "M 282 98.9 L 297.3 117.6 L 297.3 150.4 L 283.8 145.7 L 280.2 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightUpperBack,
            path_data: &[
                "M 318 98.9 L 302.7 117.6 L 302.7 150.4 L 316.2 145.7 L 319.8 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTriceps,
            path_data: &[
                "M 265.8 120 L 275.7 117.6 L 274.8 150.4 L 264 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTriceps,
            path_data: &[
                "M 334.2 120 L 324.3 117.6 L 325.2 150.4 L 336 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftLowerBack,
            path_data: &[
                "M 285.6 150.4 L 297.3 155.1 L 297.3 183.2 L 287.4 180.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightLowerBack,
            path_data: &[
                "M 314.4 150.4 L 302.7 155.1 L 302.7 183.2 L 312.6 180.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftForearm,
            path_data: &[
                "M 263.1 157.4 L 269.4 157.4 L 264 199.5 L 258.6 197.2 Z",
                "M 269.4 157.4 L 274.8 155.1 L 269.4 199.5 L 264 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightForearm,
            path_data: &[
                "M 336.9 157.4 L 330.6 157.4 L 336 199.5 L 341.4 197.2 Z",
                "M 330.6 157.4 L 325.2 155.1 L 330.6 199.5 L 336 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHands,
            path_data: &[
                "M 257.3 201.9 L 269.1 201.9 L 266.4 225.3 L 257.8 230 L 253.3 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHands,
            path_data: &[
                "M 342.7 201.9 L 330.9 201.9 L 333.6 225.3 L 342.2 230 L 346.7 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftGluteal,
            path_data: &[
                "M 282 187.8 L 299.1 192.5 L 299 230 L 283.8 232.3 L 279.3 211.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightGluteal,
            path_data: &[
                "M 318 187.8 L 300.9 192.5 L 301 230 L 316.2 232.3 L 320.7 211.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAdductors,
            path_data: &[
                "M 293.9 234.6 L 299 234.6 L 298.9 251 L 294.7 251 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAdductors,
            path_data: &[
                "M 306.1 234.6 L 301 234.6 L 301.1 251 L 305.3 251 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHamstring,
            path_data: &[
                "M 279.6 234.6 L 287.7 237 L 289.4 272.1 L 280.9 267.4 Z",
                "M 287.7 237 L 293.8 237 L 293.6 272.1 L 289.4 272.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHamstring,
            path_data: &[
                "M 320.4 234.6 L 312.3 237 L 310.6 272.1 L 319.1 267.4 Z",
                "M 312.3 237 L 306.2 237 L 306.4 272.1 L 310.6 272.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftKnees,
            path_data: &[
                "M 279.9 276.8 L 294.7 276.8 L 294.7 288.5 L 279.9 288.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightKnees,
            path_data: &[
                "M 320.1 276.8 L 305.3 276.8 L 305.3 288.5 L 320.1 288.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftCalves,
            path_data: &[
                "M 278.8 293.1 L 287.3 293.1 L 287.3 339.9 L 280.9 332.9 Z",
                "M 287.3 293.1 L 294.7 293.1 L 292.6 332.9 L 287.3 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightCalves,
            path_data: &[
                "M 321.2 293.1 L 312.7 293.1 L 312.7 339.9 L 319.1 332.9 Z",
                "M 312.7 293.1 L 305.3 293.1 L 307.4 332.9 L 312.7 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAnkles,
            path_data: &[
                "M 283.5 356.3 L 293.8 356.3 L 293.9 368 L 283.8 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAnkles,
            path_data: &[
                "M 316.5 356.3 L 306.2 356.3 L 306.1 368 L 316.2 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftFeet,
            path_data: &[
                "M 282.9 370.4 L 295 370.4 L 295 382.1 L 283 382.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightFeet,
            path_data: &[
                "M 317.1 370.4 L 305 370.4 L 305 382.1 L 317 382.1 Z",
            ],
        },
    ],
};
