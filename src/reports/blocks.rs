use crate::domain::address::{capitalize_address, capitalize_first};
use crate::matching::MatchRecord;
use crate::reports::format::thousands;
use maud::{html, Markup};

/// Minimum lot square footage for 5-unit development.
pub(super) const FIVE_UNIT_MIN_SQFT: i64 = 7260;
/// Minimum lot square footage for 4-unit development.
pub(super) const FOUR_UNIT_MIN_SQFT: i64 = 5810;

/// Lot size with the development-potential color band applied: green
/// at 5-unit size, orange at 4-unit size, plain below.
fn lot_area_markup(sqft: i64) -> Markup {
    if sqft >= FIVE_UNIT_MIN_SQFT {
        html! { span style="color:green;" { (thousands(sqft)) " SF" } }
    } else if sqft >= FOUR_UNIT_MIN_SQFT {
        html! { span style="color:orange;" { (thousands(sqft)) " SF" } }
    } else {
        html! { (thousands(sqft)) " SF" }
    }
}

fn price_per_sqft(price: i64, sqft: i64) -> i64 {
    if sqft > 0 {
        (price as f64 / sqft as f64).round() as i64
    } else {
        0
    }
}

fn containment_block(rec: &MatchRecord) -> Markup {
    let l = &rec.listing;
    let land_price = price_per_sqft(l.price, l.lot_area_sqft);

    html! {
        p { a href=(l.detail_url) { (capitalize_first(&l.address)) } }
        p {
            "Price: $" (thousands(l.price))
            ", Lot Size: " (lot_area_markup(l.lot_area_sqft))
            ", Living Area: " (thousands(l.living_area)) " SF"
            br;
            "Land Price/SF: $" (thousands(land_price)) "/SF"
        }
        img src=(l.image_url) alt="Property Image" style="width:200px; height:200px;";
        br;
        @if let Some(ntm_url) = &rec.ntm_map_url {
            p {
                a href=(ntm_url) { "NTM Map" }
                " | "
                a href=(rec.zoning_map_url) { "Zoning Map" }
            }
        }
        br; br;
    }
}

fn zoned_block(rec: &MatchRecord) -> Markup {
    let l = &rec.listing;
    let price_per = price_per_sqft(l.price, l.living_area);

    html! {
        p { a href=(l.detail_url) { (capitalize_address(&l.address)) } }
        img src=(l.image_url) alt="Property Image" style="width:200px; height:200px;";
        p {
            "Price: $" (thousands(l.price)) " ($" (thousands(price_per)) "/SF)"
            br;
            "Floor Area: " (thousands(l.living_area)) " SF, Lot Size: "
            (thousands(l.lot_area_sqft)) " SF"
            br;
            "Zone: " (rec.zone_class.as_deref().unwrap_or("?"))
        }
        p { a href=(rec.zoning_map_url) { "Zoning Map" } }
        br; br;
    }
}

/// One block per containment match plus the trailing count line.
pub fn containment_report(records: &[MatchRecord]) -> Markup {
    html! {
        @for rec in records { (containment_block(rec)) }
        p { "Total Matches Found: " (records.len()) }
    }
}

/// One block per zoned match plus the trailing count line.
pub fn zoned_report(records: &[MatchRecord]) -> Markup {
    html! {
        @for rec in records { (zoned_block(rec)) }
        p { "Total Matches Found: " (records.len()) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Listing;

    fn record(price: i64, lot_area_sqft: i64, living_area: i64) -> MatchRecord {
        MatchRecord {
            listing: Listing {
                address: "700 arlington ave n, st petersburg, fl".to_string(),
                detail_url: "http://www.zillow.com/homedetails/700".to_string(),
                price,
                lot_area_sqft,
                living_area,
                image_url: "https://photos.example.com/700.jpg".to_string(),
            },
            zone_class: Some("NT-2".to_string()),
            ntm_map_url: Some("https://egis.example.com/ntm?find=700".to_string()),
            zoning_map_url: "https://egis.example.com/zoning?find=700".to_string(),
        }
    }

    #[test]
    fn lot_banding_uses_the_unit_thresholds() {
        assert!(lot_area_markup(7260).into_string().contains("color:green"));
        assert!(lot_area_markup(7259).into_string().contains("color:orange"));
        assert!(lot_area_markup(5810).into_string().contains("color:orange"));
        assert!(!lot_area_markup(5809).into_string().contains("color:"));
    }

    #[test]
    fn price_per_sqft_guards_zero_area() {
        assert_eq!(price_per_sqft(450000, 0), 0);
        assert_eq!(price_per_sqft(450000, 9000), 50);
        assert_eq!(price_per_sqft(500000, 1450), 345);
    }

    #[test]
    fn containment_report_counts_matches() {
        let records = vec![record(450000, 9000, 1200), record(300000, 5000, 900)];
        let out = containment_report(&records).into_string();

        assert!(out.contains("Total Matches Found: 2"));
        assert!(out.contains("Price: $450,000"));
        assert!(out.contains("NTM Map"));
    }

    #[test]
    fn zoned_report_shows_zone_and_floor_area_price() {
        let records = vec![record(500000, 9000, 1450)];
        let out = zoned_report(&records).into_string();

        assert!(out.contains("Zone: NT-2"));
        assert!(out.contains("($345/SF)"));
        assert!(!out.contains("NTM Map"));
    }
}
