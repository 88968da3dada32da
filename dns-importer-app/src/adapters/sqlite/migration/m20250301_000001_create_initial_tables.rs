use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // subdomains
        manager
            .create_table(
                Table::create()
                    .table(Subdomain::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Subdomain::Name)
                            .string()
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Subdomain::CreatedAt)
                            .string()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // dns_records: records observed by the capture server
        manager
            .create_table(
                Table::create()
                    .table(DnsRecord::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DnsRecord::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DnsRecord::Name).string().not_null())
                    .col(ColumnDef::new(DnsRecord::Subdomain).string().not_null())
                    .col(ColumnDef::new(DnsRecord::Rrtype).integer().not_null())
                    .col(ColumnDef::new(DnsRecord::Content).text().not_null())
                    .col(
                        ColumnDef::new(DnsRecord::CreatedAt)
                            .string()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // dns_requests: raw queries observed by the capture server
        manager
            .create_table(
                Table::create()
                    .table(DnsRequest::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(DnsRequest::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(DnsRequest::Name).string().not_null())
                    .col(ColumnDef::new(DnsRequest::Subdomain).string().not_null())
                    .col(ColumnDef::new(DnsRequest::Request).text().not_null())
                    .col(ColumnDef::new(DnsRequest::Response).text().null())
                    .col(ColumnDef::new(DnsRequest::SrcIp).string().not_null())
                    .col(ColumnDef::new(DnsRequest::SrcHost).string().null())
                    .col(
                        ColumnDef::new(DnsRequest::CreatedAt)
                            .string()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dns_records_subdomain")
                    .table(DnsRecord::Table)
                    .col(DnsRecord::Subdomain)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_dns_requests_subdomain")
                    .table(DnsRequest::Table)
                    .col(DnsRequest::Subdomain)
                    .if_not_exists()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(DnsRequest::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(DnsRecord::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Subdomain::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Subdomain {
    #[sea_orm(iden = "subdomains")]
    Table,
    Name,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DnsRecord {
    #[sea_orm(iden = "dns_records")]
    Table,
    Id,
    Name,
    Subdomain,
    Rrtype,
    Content,
    CreatedAt,
}

#[derive(DeriveIden)]
enum DnsRequest {
    #[sea_orm(iden = "dns_requests")]
    Table,
    Id,
    Name,
    Subdomain,
    Request,
    Response,
    SrcIp,
    SrcHost,
    CreatedAt,
}
