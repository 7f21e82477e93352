//! Repository for the `galleries` table and its embedded hotspots.

use hotspot_core::hotspot::Hotspot;
use hotspot_core::listing::{GalleryFilter, SortField};
use hotspot_core::types::DbId;
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::gallery::{CreateGallery, DeletedGallery, Gallery, UpdateGallery};

/// Column list for `galleries` queries.
const COLUMNS: &str = "id, title, image_url, image_file_id, hotspots, created_at, updated_at";

/// Provides CRUD operations for galleries and their hotspots.
pub struct GalleryRepo;

impl GalleryRepo {
    /// Insert a new gallery, returning the full row.
    pub async fn create(pool: &PgPool, input: &CreateGallery) -> Result<Gallery, sqlx::Error> {
        let query = format!(
            "INSERT INTO galleries (title, image_url, image_file_id, hotspots) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(&input.title)
            .bind(&input.image_url)
            .bind(&input.image_file_id)
            .bind(Json(&input.hotspots))
            .fetch_one(pool)
            .await
    }

    /// Find a gallery by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM galleries WHERE id = $1");
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// One page of galleries matching `filter`, plus the total match count.
    pub async fn list(
        pool: &PgPool,
        filter: &GalleryFilter,
    ) -> Result<(Vec<Gallery>, i64), sqlx::Error> {
        let pattern = filter.title_pattern();
        let (created_from, created_before) = filter.date_range.timestamp_bounds();

        let mut conditions: Vec<String> = Vec::new();
        let mut param_idx: usize = 1;

        if pattern.is_some() {
            conditions.push(format!("title ILIKE ${param_idx}"));
            param_idx += 1;
        }
        if created_from.is_some() {
            conditions.push(format!("created_at >= ${param_idx}"));
            param_idx += 1;
        }
        if created_before.is_some() {
            conditions.push(format!("created_at < ${param_idx}"));
            param_idx += 1;
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let count_query = format!("SELECT COUNT(*) FROM galleries {where_clause}");
        let mut count = sqlx::query_scalar::<_, i64>(&count_query);
        if let Some(p) = &pattern {
            count = count.bind(p);
        }
        if let Some(ts) = created_from {
            count = count.bind(ts);
        }
        if let Some(ts) = created_before {
            count = count.bind(ts);
        }
        let total = count.fetch_one(pool).await?;

        let sort_expr = match filter.sort.field() {
            SortField::Title => "lower(title)",
            SortField::CreatedAt => "created_at",
            SortField::HotspotCount => "jsonb_array_length(hotspots)",
        };
        let direction = filter.sort.direction().as_sql();

        let query = format!(
            "SELECT {COLUMNS} FROM galleries {where_clause} \
             ORDER BY {sort_expr} {direction}, id {direction} \
             LIMIT ${param_idx} OFFSET ${}",
            param_idx + 1
        );

        let mut q = sqlx::query_as::<_, Gallery>(&query);
        if let Some(p) = &pattern {
            q = q.bind(p);
        }
        if let Some(ts) = created_from {
            q = q.bind(ts);
        }
        if let Some(ts) = created_before {
            q = q.bind(ts);
        }
        q = q.bind(filter.limit()).bind(filter.offset());

        let rows = q.fetch_all(pool).await?;
        Ok((rows, total))
    }

    /// Replace title and hotspots, and the image when a replacement is given.
    ///
    /// Returns the updated row together with the file id of the image it
    /// replaced, or `None` if the gallery does not exist.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateGallery,
    ) -> Result<Option<(Gallery, Option<String>)>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let previous_file_id: Option<Option<String>> =
            sqlx::query_scalar("SELECT image_file_id FROM galleries WHERE id = $1 FOR UPDATE")
                .bind(id)
                .fetch_optional(&mut *tx)
                .await?;
        let Some(previous_file_id) = previous_file_id else {
            return Ok(None);
        };

        let query = format!(
            "UPDATE galleries SET \
                title = $2, \
                hotspots = $3, \
                image_url = COALESCE($4, image_url), \
                image_file_id = CASE WHEN $4::text IS NOT NULL THEN $5 ELSE image_file_id END \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        let gallery = sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(Json(&input.hotspots))
            .bind(input.image.as_ref().map(|img| img.url.as_str()))
            .bind(input.image.as_ref().map(|img| img.file_id.as_str()))
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;

        let replaced = if input.image.is_some() {
            previous_file_id
        } else {
            None
        };
        Ok(Some((gallery, replaced)))
    }

    /// Delete a gallery. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM galleries WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Delete every gallery in `ids`, returning what was actually removed.
    pub async fn delete_many(
        pool: &PgPool,
        ids: &[DbId],
    ) -> Result<Vec<DeletedGallery>, sqlx::Error> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }
        sqlx::query_as::<_, DeletedGallery>(
            "DELETE FROM galleries WHERE id = ANY($1) RETURNING id, image_file_id",
        )
        .bind(ids)
        .fetch_all(pool)
        .await
    }

    // -- hotspots -------------------------------------------------------------

    /// Hotspots of a gallery in stored order, or `None` if it does not exist.
    pub async fn list_hotspots(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Vec<Hotspot>>, sqlx::Error> {
        let row: Option<Json<Vec<Hotspot>>> =
            sqlx::query_scalar("SELECT hotspots FROM galleries WHERE id = $1")
                .bind(id)
                .fetch_optional(pool)
                .await?;
        Ok(row.map(|json| json.0))
    }

    /// Append a hotspot while the gallery holds fewer than `max` of them.
    ///
    /// Returns `None` if the gallery does not exist or is already full.
    pub async fn append_hotspot(
        pool: &PgPool,
        id: DbId,
        hotspot: &Hotspot,
        max: i32,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET hotspots = hotspots || jsonb_build_array($2::jsonb) \
             WHERE id = $1 AND jsonb_array_length(hotspots) < $3 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(Json(hotspot))
            .bind(max)
            .fetch_optional(pool)
            .await
    }

    /// Replace the hotspot at `index`.
    ///
    /// Returns `None` if the gallery does not exist or `index` is out of range.
    pub async fn replace_hotspot(
        pool: &PgPool,
        id: DbId,
        index: i32,
        hotspot: &Hotspot,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET hotspots = jsonb_set(hotspots, ARRAY[$2::int4::text], $3::jsonb) \
             WHERE id = $1 AND $2::int4 >= 0 AND $2::int4 < jsonb_array_length(hotspots) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(index)
            .bind(Json(hotspot))
            .fetch_optional(pool)
            .await
    }

    /// Remove the hotspot at `index`; later hotspots shift down by one.
    ///
    /// Returns `None` if the gallery does not exist or `index` is out of range.
    pub async fn remove_hotspot(
        pool: &PgPool,
        id: DbId,
        index: i32,
    ) -> Result<Option<Gallery>, sqlx::Error> {
        let query = format!(
            "UPDATE galleries SET hotspots = hotspots - $2::int4 \
             WHERE id = $1 AND $2::int4 >= 0 AND $2::int4 < jsonb_array_length(hotspots) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Gallery>(&query)
            .bind(id)
            .bind(index)
            .fetch_optional(pool)
            .await
    }
}
