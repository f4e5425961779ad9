use crate::models::Area;

/// CSV rendering of a filtered set, one row per area. Pure formatting over
/// the filter output; writing the file is the caller's concern.
pub fn to_csv(areas: &[Area]) -> String {
    let mut csv = String::from("Area,Latitude,Longitude,Price,Score\n");
    for area in areas {
        csv.push_str(&format!(
            "{},{},{},{},{}\n",
            area.name, area.latitude, area.longitude, area.price, area.score
        ));
    }
    csv
}
