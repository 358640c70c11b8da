// src/db/report_repo.rs

use sqlx::PgPool;

use crate::{
    common::error::AppError,
    models::reports::{
        ClientVesselCount, InspectedProcess, LargestVessel, OrganActiveProcesses, OwnerDocument,
        PanelEntry,
    },
};

// As consultas fixas da tela "Consultas". Nenhuma recebe parâmetro.
#[derive(Clone)]
pub struct ReportRepository {
    pool: PgPool,
}

impl ReportRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    // 1. Quantas embarcações cada cliente possui (inclusive zero)
    pub async fn clients_with_vessel_count(&self) -> Result<Vec<ClientVesselCount>, AppError> {
        let rows = sqlx::query_as::<_, ClientVesselCount>(
            r#"
            SELECT
                pe.FirstName AS first_name,
                pe.LastName AS last_name,
                c.CPF AS cpf,
                COUNT(v.Id) AS total_vessels
            FROM Person pe
            INNER JOIN Client c ON pe.Id = c.Id_Person
            LEFT JOIN Vessel v ON c.Id_Person = v.Id_Client
            GROUP BY pe.Id, pe.FirstName, pe.LastName, c.CPF
            ORDER BY pe.FirstName, pe.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // 2. Órgãos com pelo menos um processo Ativo
    pub async fn organs_with_active_processes(&self) -> Result<Vec<OrganActiveProcesses>, AppError> {
        let rows = sqlx::query_as::<_, OrganActiveProcesses>(
            r#"
            SELECT o.OrganName AS organ_name, COUNT(p.Id) AS active_processes
            FROM Organ o
            INNER JOIN Process p ON o.Id = p.Id_Organ
            WHERE p.Status = 'Ativo'
            GROUP BY o.Id, o.OrganName
            HAVING COUNT(p.Id) >= 1
            ORDER BY o.OrganName, o.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // 3. Documentos dos clientes que possuem alguma embarcação
    pub async fn documents_of_vessel_owners(&self) -> Result<Vec<OwnerDocument>, AppError> {
        let rows = sqlx::query_as::<_, OwnerDocument>(
            r#"
            SELECT d."Name" AS document, pe.FirstName AS first_name, pe.LastName AS last_name
            FROM "Document" d
            INNER JOIN Client c ON d.Id_Client = c.Id_Person
            INNER JOIN Person pe ON c.Id_Person = pe.Id
            WHERE d.Id_Client IN (SELECT Id_Client FROM Vessel WHERE Id_Client IS NOT NULL)
            ORDER BY d."Name", d.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // 4. Processos com pelo menos uma inspeção
    pub async fn processes_with_inspections(&self) -> Result<Vec<InspectedProcess>, AppError> {
        let rows = sqlx::query_as::<_, InspectedProcess>(
            r#"
            SELECT p.ProcessName AS process_name, p.ProcessNumber AS process_number, p.Status AS status
            FROM Process p
            WHERE EXISTS (SELECT 1 FROM Inspection i WHERE i.Id_Process = p.Id)
            ORDER BY p.ProcessNumber, p.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // 5. A(s) embarcação(ões) de maior capacidade; empates aparecem todos
    pub async fn largest_vessels(&self) -> Result<Vec<LargestVessel>, AppError> {
        let rows = sqlx::query_as::<_, LargestVessel>(
            r#"
            SELECT v."Name" AS name, v."Type" AS vessel_type, v.Capacity AS capacity, v."Size" AS size
            FROM Vessel v
            WHERE v.Capacity >= ALL (SELECT Capacity FROM Vessel)
            ORDER BY v."Name", v.Id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }

    // 6. Painel geral: cliente, usuário vinculado, embarcações e contagens
    pub async fn general_panel(&self) -> Result<Vec<PanelEntry>, AppError> {
        let rows = sqlx::query_as::<_, PanelEntry>(
            r#"
            SELECT
                pe.FirstName || ' ' || pe.LastName AS client,
                c.CPF AS cpf,
                u.Email AS email,
                v."Name" AS vessel,
                v."Type" AS vessel_type,
                v.Capacity AS capacity,
                (SELECT COUNT(*) FROM Vessel_Document vd WHERE vd.Id_Vessel = v.Id) AS document_count,
                (SELECT COUNT(*) FROM Phones ph WHERE ph.Id_Client = c.Id_Person) AS phone_count
            FROM Person pe
            INNER JOIN Client c ON pe.Id = c.Id_Person
            LEFT JOIN "User" u ON c.Id_User = u.Id_Person
            LEFT JOIN Vessel v ON c.Id_Person = v.Id_Client
            ORDER BY pe.FirstName, pe.Id, v."Name"
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows)
    }
}
