//! Pure transforms from the listings wire format into the domain model.

use listings_client::{ApiFacetGroup, ApiFacetValue, ApiProduct, FacetValue, ListingsResponse};

use crate::types::facet::{FacetGroup, FacetKind, FacetOption};
use crate::types::item::ListingItem;
use crate::types::page::ListingPage;

pub fn map_product(product: ApiProduct) -> ListingItem {
    let item = ListingItem::new(
        product.id,
        product.product_name,
        product.price.price_inc_tax,
        product.price.was_price,
    )
    .with_promotion(product.price.is_on_promotion);

    match product.image {
        Some(image) => {
            let alt = image.attributes.and_then(|a| a.image_alt_text);
            item.with_image(image.url, alt)
        }
        None => item,
    }
}

/// Options whose value is neither text nor a `{gte, lte}` range are dropped.
pub fn map_facet_group(group: ApiFacetGroup) -> FacetGroup {
    let options: Vec<FacetOption> = group.options.into_iter().filter_map(map_facet_option).collect();
    let kind = FacetKind::infer(&options);

    FacetGroup {
        identifier: group.identifier,
        display_name: group.display_name,
        priority: group.priority,
        kind,
        options,
    }
}

fn map_facet_option(option: ApiFacetValue) -> Option<FacetOption> {
    let value = FacetValue::from_json(&option.value)?;
    Some(FacetOption {
        identifier: option.identifier,
        label: option.display_value,
        value,
        product_count: option.product_count,
        priority: option.priority,
    })
}

pub fn map_response(response: ListingsResponse) -> ListingPage {
    ListingPage {
        items: response.products.into_iter().map(map_product).collect(),
        total_results: response.total_results,
        facet_groups: response
            .facets
            .map(|groups| groups.into_iter().map(map_facet_group).collect()),
    }
}
