//! Male back view.

use crate::types::{BodyPartSlug, Gender, Side};

use super::{AssetTable, BodyPartAsset};

pub static MALE_BACK: AssetTable = AssetTable {
    gender: Gender::Male,
    side: Side::Back,
    view_box: "200 0 200 400",
    outline: &["M 300 7.7 L 290 11.2 L 284 21.7 L 285 49.8 L 291 66.2 L 290 77.9 L 276 84.9 L 263 91.9 L 258 117.6 L 257 152.7 L 252 197.2 L 250 222.9 L 258 232.3 L 266 227.6 L 268 201.9 L 274 159.8 L 277 176.1 L 278 194.9 L 276 260.4 L 279 290.8 L 280 342.3 L 283 370.4 L 278 389.1 L 299 389.1 L 299 253.4 L 300 251 L 301 253.4 L 301 389.1 L 322 389.1 L 317 370.4 L 320 342.3 L 321 290.8 L 324 260.4 L 322 194.9 L 323 176.1 L 326 159.8 L 332 201.9 L 334 227.6 L 342 232.3 L 350 222.9 L 348 197.2 L 343 152.7 L 342 117.6 L 337 91.9 L 324 84.9 L 310 77.9 L 309 66.2 L 315 49.8 L 316 21.7 L 310 11.2 Z"],
    parts: &[
        BodyPartAsset {
            slug: BodyPartSlug::Hair,
            path_data: &[
                "M 286 21.7 L 292 12.3 L 300 10 L 308 12.3 L 314 21.7 L 314 42.8 L 300 35.7 L 286 42.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::Head,
            path_data: &[
                "M 286 42.8 L 300 35.7 L 314 42.8 L 312 56.8 L 300 63.8 L 288 56.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftNeck,
            path_data: &[
                "M 292 63.8 L 299 63.8 L 299 80.2 L 290 80.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightNeck,
            path_data: &[
                "M 308 63.8 L 301 63.8 L 301 80.2 L 310 80.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTrapezius,
            path_data: &[
                "M 299 73.2 L 290 80.2 L 278 89.6 L 299 122.3 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTrapezius,
            path_data: &[
                "M 301 73.2 L 310 80.2 L 322 89.6 L 301 122.3 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftDeltoids,
            path_data: &[
                "M 278 89.6 L 266 94.2 L 262 117.6 L 272 115.3 L 280 98.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightDeltoids,
            path_data: &[
                "M 322 89.6 L 334 94.2 L 338 117.6 L 328 115.3 L 320 98.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftUpperBack,
            path_data: &[
                "M 280 98.9 L 297 117.6 L 297 150.4 L 282 145.7 L 278 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightUpperBack,
            path_data: &[
                "M 320 98.9 L 303 117.6 L 303 150.4 L 318 145.7 L 322 117.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftTriceps,
            path_data: &[
                "M 262 120 L 273 117.6 L 272 150.4 L 260 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightTriceps,
            path_data: &[
                "M 338 120 L 327 117.6 L 328 150.4 L 340 152.7 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftLowerBack,
            path_data: &[
                "M 284 150.4 L 297 155.1 L 297 183.2 L 286 180.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightLowerBack,
            path_data: &[
                "M 316 150.4 L 303 155.1 L 303 183.2 L 314 180.8 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftForearm,
            path_data: &[
                "M 259 157.4 L 266 157.4 L 260 199.5 L 254 197.2 Z",
                "M 266 157.4 L 272 155.1 L 266 199.5 L 260 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightForearm,
            path_data: &[
                "M 341 157.4 L 334 157.4 L 340 199.5 L 346 197.2 Z",
                "M 334 157.4 L 328 155.1 L 334 199.5 L 340 199.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHands,
            path_data: &[
                "M 253 201.9 L 266 201.9 L 266 225.3 L 258 230 L 252 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHands,
            path_data: &[
                "M 347 201.9 L 334 201.9 L 334 225.3 L 342 230 L 348 220.6 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftGluteal,
            path_data: &[
                "M 280 187.8 L 299 192.5 L 299 230 L 284 232.3 L 278 211.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightGluteal,
            path_data: &[
                "M 320 187.8 L 301 192.5 L 301 230 L 316 232.3 L 322 211.2 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAdductors,
            path_data: &[
                "M 294 234.6 L 299 234.6 L 299 251 L 295 251 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAdductors,
            path_data: &[
                "M 306 234.6 L 301 234.6 L 301 251 L 305 251 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftHamstring,
            path_data: &[
                "M 280 234.6 L 288 237 L 290 272.1 L 282 267.4 Z",
                "M 288 237 L 294 237 L 294 272.1 L 290 272.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightHamstring,
            path_data: &[
                "M 320 234.6 L 312 237 L 310 272.1 L 318 267.4 Z",
                "M 312 237 L 306 237 L 306 272.1 L 310 272.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftKnees,
            path_data: &[
                "M 281 276.8 L 295 276.8 L 295 288.5 L 281 288.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightKnees,
            path_data: &[
                "M 319 276.8 L 305 276.8 L 305 288.5 L 319 288.5 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftCalves,
            path_data: &[
                "M 280 293.1 L 288 293.1 L 288 339.9 L 282 332.9 Z",
                "M 288 293.1 L 295 293.1 L 293 332.9 L 288 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightCalves,
            path_data: &[
                "M 320 293.1 L 312 293.1 L 312 339.9 L 318 332.9 Z",
                "M 312 293.1 L 305 293.1 L 307 332.9 L 312 339.9 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftAnkles,
            path_data: &[
                "M 284 356.3 L 294 356.3 L 294 368 L 284 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightAnkles,
            path_data: &[
                "M 316 356.3 L 306 356.3 L 306 368 L 316 368 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::LeftFeet,
            path_data: &[
                "M 283 370.4 L 295 370.4 L 295 382.1 L 283 382.1 Z",
            ],
        },
        BodyPartAsset {
            slug: BodyPartSlug::RightFeet,
            path_data: &[
                "M 317 370.4 L 305 370.4 L 305 382.1 L 317 382.1 Z",
            ],
        },
    ],
};
