//! DTO to contract model mappers

use crate::contract::Brand;
use super::dto::BrandDto;

impl From<Brand> for BrandDto {
    fn from(model: Brand) -> Self {
        Self {
            id: model.id,
            name: model.name,
        }
    }
}

impl From<BrandDto> for Brand {
    fn from(dto: BrandDto) -> Self {
        Self {
            id: dto.id,
            name: dto.name,
        }
    }
}
