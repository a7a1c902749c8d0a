use crate::types::Site;

/// Greedily hand out trip days to sites in selection order.
///
/// Returns one entry per assigned day. A site gets at most its `duration_days`,
/// and once the trip is full the remaining sites are dropped.
pub(crate) fn allocate_site_days(sites: &[Site], total_days: u32) -> Vec<&Site> {
    let mut remaining = total_days;
    let mut assigned = Vec::new();

    for site in sites {
        if remaining == 0 {
            break;
        }
        // duration_days >= 1 is validated, and the min keeps it within u32
        let take = site.duration_days.min(i64::from(remaining)) as u32;
        assigned.extend(std::iter::repeat(site).take(take as usize));
        remaining -= take;
    }

    assigned
}
